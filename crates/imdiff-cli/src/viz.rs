use imdiff_image::Image;
use imdiff_imgproc::{colormap, metrics};

use crate::compare::{CompareConfig, CompareOutput};

/// Display range of the signed error panel.
const ERROR_RANGE: f32 = 0.1;

/// Display range of the relative error panel.
const RELATIVE_ERROR_RANGE: f32 = 0.5;

fn log_rgb_panel(
    rec: &rerun::RecordingStream,
    entity_path: &str,
    panel: &Image<u8, 3>,
) -> Result<(), rerun::RecordingStreamError> {
    rec.log(
        entity_path,
        &rerun::Image::from_elements(
            panel.as_slice(),
            panel.size().into(),
            rerun::ColorModel::RGB,
        ),
    )
}

// Titles are user supplied and may contain characters with path meaning, so
// they go into the text document verbatim while the panels live under fixed
// entity paths.
fn metrics_document(config: &CompareConfig, output: &CompareOutput) -> String {
    format!(
        "candidate: {}\nreference: {}\nrMSE={}\nrelMSE={}",
        config.candidate_title,
        config.reference_title,
        metrics::truncate_decimal(output.rmse, 4),
        metrics::truncate_decimal(output.relative_rmse, 4),
    )
}

/// Render the four comparison panels and the metrics text in a rerun viewer.
///
/// Panels: candidate and reference on a grayscale ramp over [0, 1], the error
/// grid on a diverging ramp over ±0.1 and the relative error grid on a
/// diverging ramp over ±0.5. The display titles and both metrics, truncated
/// to 4 decimal digits, are logged as a text document.
pub fn show(
    config: &CompareConfig,
    output: &CompareOutput,
) -> Result<(), Box<dyn std::error::Error>> {
    let rec = rerun::RecordingStreamBuilder::new("imdiff").spawn()?;

    let size = output.candidate.size();

    let mut panel = Image::<u8, 3>::from_size_val(size, 0)?;

    colormap::grayscale_from_range(&output.candidate, &mut panel, 0.0, 1.0)?;
    log_rgb_panel(&rec, "compare/candidate", &panel)?;

    colormap::grayscale_from_range(&output.reference, &mut panel, 0.0, 1.0)?;
    log_rgb_panel(&rec, "compare/reference", &panel)?;

    colormap::diverging_from_range(&output.error, &mut panel, -ERROR_RANGE, ERROR_RANGE)?;
    log_rgb_panel(&rec, "compare/error", &panel)?;

    colormap::diverging_from_range(
        &output.relative_error,
        &mut panel,
        -RELATIVE_ERROR_RANGE,
        RELATIVE_ERROR_RANGE,
    )?;
    log_rgb_panel(&rec, "compare/relative_error", &panel)?;

    rec.log(
        "compare/metrics",
        &rerun::TextDocument::new(metrics_document(config, output)),
    )?;

    Ok(())
}
