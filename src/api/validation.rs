use tracing::warn;

use crate::error::{ChartError, ChartResult};

use super::BrushConfig;

pub(super) fn validate_brush_config(config: BrushConfig) -> ChartResult<BrushConfig> {
    if !config.handle_size.is_finite() || config.handle_size <= 0.0 {
        return Err(reject(ChartError::InvalidConfig(
            "brush handle size must be finite and > 0".to_owned(),
        )));
    }

    config.selected_box_style.validate().map_err(reject)?;
    Ok(config)
}

fn reject(error: ChartError) -> ChartError {
    warn!(%error, "rejected brush config");
    error
}
