//! render_ppm.rs - headless CLI that rasterizes a fixed test scene into a
//! binary PPM (P6) image. Handy for eyeballing fill rules and clipping
//! without a window.
//!
//! USAGE:
//! ```bash
//! cargo run --bin render_ppm -- \
//!     --out frame.ppm \
//!     --width 320 --height 240
//! ```

use anyhow::{Context, bail};
use clap::Parser;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use raster2d::{Color, DrawCall, Point2FD, Point2I, RendererExt, Rgba, Software};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Output image
    #[arg(long, value_name = "FILE", default_value = "frame.ppm")]
    out: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 320)]
    width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 240)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let (w, h) = (opts.width, opts.height);
    if w < 16 || h < 16 {
        bail!("image must be at least 16x16, got {w}x{h}");
    }

    let mut frame = vec![0 as Rgba; w * h];
    {
        let mut sw = Software::new(&mut frame, w, h)?;
        sw.draw_calls(&scene(w as f64, h as f64));
    }

    let file = File::create(&opts.out)
        .with_context(|| format!("creating {}", opts.out.display()))?;
    let mut out = BufWriter::new(file);
    write_ppm(&mut out, &frame, w, h)?;
    out.flush()?;

    println!("wrote {}x{} image to {}", w, h, opts.out.display());
    Ok(())
}

/// Reference scene, laid out relative to the image size.
fn scene(w: f64, h: f64) -> Vec<DrawCall> {
    let pt = |fx: f64, fy: f64| Point2FD::new(fx * w, fy * h);
    let ip = |fx: f64, fy: f64| Point2I::new((fx * w) as i32, (fy * h) as i32);

    vec![
        // flat-bottom, solid
        DrawCall::Fill {
            pts: [pt(0.25, 0.05), pt(0.05, 0.45), pt(0.45, 0.45)],
            color: Color::new(200, 60, 40),
        },
        // general triangle, split at the middle vertex
        DrawCall::Gouraud {
            pts: [pt(0.60, 0.05), pt(0.95, 0.30), pt(0.55, 0.50)],
            colors: [Color::RED, Color::GREEN, Color::BLUE],
        },
        // flat-top, half off the left edge
        DrawCall::Gouraud {
            pts: [pt(-0.20, 0.55), pt(0.40, 0.55), pt(0.15, 0.95)],
            colors: [Color::WHITE, Color::new(255, 200, 0), Color::new(0, 120, 255)],
        },
        DrawCall::Outline {
            pts: [ip(0.55, 0.60), ip(0.95, 0.65), ip(0.70, 0.95)],
            color: Color::WHITE,
        },
        // lines poking out of every side go through the clipper
        DrawCall::Line {
            p0: ip(-0.5, 0.5),
            p1: ip(1.5, 0.52),
            color: Color::new(0, 255, 160),
        },
        DrawCall::Line {
            p0: ip(0.5, -0.5),
            p1: ip(0.48, 1.5),
            color: Color::new(0, 255, 160),
        },
        DrawCall::Line {
            p0: ip(-0.1, -0.1),
            p1: ip(1.1, 1.1),
            color: Color::new(255, 0, 255),
        },
        DrawCall::Pixel {
            p: ip(0.5, 0.5),
            color: Color::WHITE,
        },
    ]
}

/// Binary PPM: header, then packed RGB bytes row by row.
fn write_ppm<W: Write>(out: &mut W, frame: &[Rgba], w: usize, h: usize) -> anyhow::Result<()> {
    write!(out, "P6\n{w} {h}\n255\n")?;
    let mut row = Vec::with_capacity(w * 3);
    for line in frame.chunks_exact(w).take(h) {
        row.clear();
        for &px in line {
            let c = Color::from_argb(px);
            row.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out.write_all(&row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_header_and_payload() {
        let frame = [Color::RED.to_argb(), Color::BLUE.to_argb()];
        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &frame, 2, 1).unwrap();
        let header = b"P6\n2 1\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn scene_draws_something_everywhere() {
        let (w, h) = (64, 48);
        let mut frame = vec![0; w * h];
        Software::new(&mut frame, w, h)
            .unwrap()
            .draw_calls(&scene(w as f64, h as f64));
        for quadrant in [(0, 0), (w / 2, 0), (0, h / 2), (w / 2, h / 2)] {
            let lit = (quadrant.1..quadrant.1 + h / 2)
                .flat_map(|y| (quadrant.0..quadrant.0 + w / 2).map(move |x| (x, y)))
                .filter(|&(x, y)| frame[y * w + x] != 0)
                .count();
            assert!(lit > 0, "quadrant {quadrant:?} empty");
        }
    }
}
