// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::Path;
use std::sync::Once;

use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use crate::config::ChartSettings;
use crate::{Error, Study};

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const MEASURED: RGBColor = hexcolour!(0x332288);
const REFERENCE: RGBColor = hexcolour!(0xAA0000);

// the bitmap backend has no font discovery of its own, so a face must be
// registered before any text is drawn; a failure here surfaces as a draw
// error on the first label
fn ensure_font() {
    static FONT: Once = Once::new();
    FONT.call_once(|| {
        let _ = register_font(
            "sans-serif",
            FontStyle::Normal,
            dejavu::sans_mono::regular(),
        );
    });
}

/// Render the measured curve and its ideal-scaling reference to `path`.
/// The image format follows the file extension (PNG or JPEG).
pub fn render(study: &Study, settings: &ChartSettings, path: &Path) -> Result<(), Error> {
    ensure_font();
    let result = if settings.log_scale() {
        draw_log(study, settings, path)
    } else {
        draw_linear(study, settings, path)
    };
    result.map_err(|e| Error::PlotWrite {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

fn draw_linear(
    study: &Study,
    settings: &ChartSettings,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let measured = study.points();
    let reference = study.reference_curve();

    let x_end = (study.max_nproc() as f64 * 1.05).max(1.5);
    let y_end = measured
        .iter()
        .chain(reference.iter())
        .map(|&(_, y)| y)
        .fold(0.0, f64::max)
        * 1.05;

    let root =
        BitMapBackend::new(path, (settings.width(), settings.height())).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(settings.title(), ("sans-serif", 40))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(1.0..x_end, 0.0..y_end)?;

    chart
        .configure_mesh()
        .x_desc(settings.x_label())
        .y_desc(settings.y_label())
        .x_label_style(("sans-serif", 20))
        .y_label_style(("sans-serif", 20))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            measured.iter().copied(),
            MEASURED.stroke_width(2),
        ))?
        .label("Measured")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MEASURED.stroke_width(2)));
    chart.draw_series(
        measured
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, MEASURED.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            reference.iter().copied(),
            REFERENCE.stroke_width(2),
        ))?
        .label("Perfect scaling")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REFERENCE.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

fn draw_log(
    study: &Study,
    settings: &ChartSettings,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let measured = study.points();
    let reference = study.reference_curve();

    let x_end = (study.max_nproc() as f64 * 1.5).max(2.0);
    let y_end = measured
        .iter()
        .chain(reference.iter())
        .map(|&(_, y)| y)
        .fold(0.0, f64::max)
        * 1.5;
    let y_start = measured
        .iter()
        .chain(reference.iter())
        .map(|&(_, y)| y)
        .fold(f64::MAX, f64::min)
        * 0.8;

    let root =
        BitMapBackend::new(path, (settings.width(), settings.height())).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(settings.title(), ("sans-serif", 40))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d((1.0..x_end).log_scale(), (y_start..y_end).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(settings.x_label())
        .y_desc(settings.y_label())
        .x_label_style(("sans-serif", 20))
        .y_label_style(("sans-serif", 20))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            measured.iter().copied(),
            MEASURED.stroke_width(2),
        ))?
        .label("Measured")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MEASURED.stroke_width(2)));
    chart.draw_series(
        measured
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, MEASURED.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            reference.iter().copied(),
            REFERENCE.stroke_width(2),
        ))?
        .label("Perfect scaling")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REFERENCE.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Sample;
    use std::path::PathBuf;

    fn study() -> Study {
        Study::from_samples(vec![
            Sample::new(1, 30.0),
            Sample::new(2, 16.0),
            Sample::new(4, 10.0),
            Sample::new(8, 7.5),
        ])
    }

    fn settings() -> ChartSettings {
        toml::from_str("width = 320\nheight = 240").unwrap()
    }

    fn out_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scalinggraph-plot-{}-{}", std::process::id(), name))
    }

    #[test]
    fn render_writes_png() {
        let path = out_path("linear.png");
        let _ = std::fs::remove_file(&path);
        render(&study(), &settings(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn render_writes_jpeg() {
        let path = out_path("linear.jpg");
        let _ = std::fs::remove_file(&path);
        render(&study(), &settings(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn render_log_scale() {
        let path = out_path("log.png");
        let _ = std::fs::remove_file(&path);
        let settings: ChartSettings =
            toml::from_str("width = 320\nheight = 240\nlog_scale = true").unwrap();
        render(&study(), &settings, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn render_reports_unwritable_path() {
        let path = std::env::temp_dir()
            .join("scalinggraph-no-such-dir")
            .join("out.png");
        let result = render(&study(), &settings(), &path);
        assert!(matches!(result, Err(Error::PlotWrite { .. })));
    }
}
