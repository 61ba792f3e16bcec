//! Spinning Gouraud cube on the software rasterizer.
//!
//! Controls  ←/→ = spin speed  W = toggle wireframe  Esc = quit
//!
//! ```bash
//! cargo run --release --bin view_tri -- --width 800 --height 600
//! ```

use clap::Parser;
use glam::{Mat4, Vec3, Vec4Swizzles};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::{Duration, Instant};

use raster2d::{Color, LineAlgorithm, Point2FD, Renderer, Software};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Start with triangle outlines drawn over the fill
    #[arg(long)]
    wireframe: bool,

    /// Use the DDA walker instead of Bresenham for outlines
    #[arg(long)]
    dda: bool,

    /// Frame cap
    #[arg(long, default_value_t = 60)]
    fps: usize,
}

// ─── cube mesh ──────────────────────────────────────────────────────────────
const CUBE_VERTS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

// counter-clockwise when seen from outside
const CUBE_TRIS: [[usize; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [3, 6, 2],
    [3, 7, 6],
    [0, 4, 7],
    [0, 7, 3],
    [1, 2, 6],
    [1, 6, 5],
];

const CUBE_COLOURS: [Color; 8] = [
    Color::new(255, 0, 0),
    Color::new(0, 255, 0),
    Color::new(0, 0, 255),
    Color::new(255, 255, 0),
    Color::new(255, 0, 255),
    Color::new(0, 255, 255),
    Color::new(255, 255, 255),
    Color::new(40, 40, 40),
];

/// Screen-space triangle waiting for the painter's sort.
struct Projected {
    pts: [Point2FD; 3],
    colours: [Color; 3],
    depth: f32,
}

// ─── entry point ────────────────────────────────────────────────────────────
fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let (w, h) = (opts.width, opts.height);

    let mut frame = vec![0u32; w * h];
    let mut win = Window::new("raster2d — Gouraud cube", w, h, WindowOptions::default())?;
    win.set_target_fps(opts.fps);

    let algo = if opts.dda {
        LineAlgorithm::Dda
    } else {
        LineAlgorithm::Bresenham
    };
    let mut wireframe = opts.wireframe;
    let mut spin = 1.0_f32;
    let mut angle = 0.0_f32;

    let proj = Mat4::perspective_rh(60_f32.to_radians(), w as f32 / h as f32, 0.1, 100.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();
    let mut last_tick = Instant::now();

    let mut tris: Vec<Projected> = Vec::with_capacity(CUBE_TRIS.len());

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();

        if win.is_key_down(Key::Left) {
            spin -= dt;
        }
        if win.is_key_down(Key::Right) {
            spin += dt;
        }
        if win.is_key_pressed(Key::W, KeyRepeat::No) {
            wireframe = !wireframe;
        }
        angle += spin * dt;

        let t0 = Instant::now();

        let model = Mat4::from_rotation_y(angle) * Mat4::from_rotation_x(angle * 0.7);
        let mvp = proj * view * model;
        project_cube(&mvp, w, h, &mut tris);

        /* draw */
        {
            let mut sw = Software::new(&mut frame, w, h)?.with_line_algorithm(algo);
            sw.clear(Color::new(0x20, 0x20, 0x20));
            for t in &tris {
                let [a, b, c] = t.pts;
                let [ca, cb, cc] = t.colours;
                sw.fill_triangle_gouraud(a, b, c, ca, cb, cc);
                if wireframe {
                    let [a, b, c] = t.pts.map(|p| p.cast::<i32>());
                    sw.draw_triangle_outline(a, b, c, Color::WHITE);
                }
            }
        }

        acc_time += t0.elapsed();
        acc_frames += 1;
        win.update_with_buffer(&frame, w, h)?;

        // ─────────── report every ~3 s ────────────────────
        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!("avg render: {:.3} ms  ({} tris)", avg_ms, tris.len());
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

// ─── model → screen ─────────────────────────────────────────────────────────
/// Project, cull back faces, sort far-to-near.
fn project_cube(mvp: &Mat4, w: usize, h: usize, out: &mut Vec<Projected>) {
    out.clear();

    let screen: Vec<(Point2FD, f32)> = CUBE_VERTS
        .iter()
        .map(|&v| {
            let clip = *mvp * Vec3::from(v).extend(1.0);
            let ndc = clip.xyz() / clip.w;
            let x = (ndc.x + 1.0) * 0.5 * w as f32;
            let y = (1.0 - ndc.y) * 0.5 * h as f32; // row 0 = top
            (Point2FD::new(x as f64, y as f64), ndc.z)
        })
        .collect();

    for tri in CUBE_TRIS {
        let [a, b, c] = tri.map(|i| screen[i].0);
        // y grows downwards: front faces have negative signed area
        let area = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
        if area >= 0.0 {
            continue;
        }
        out.push(Projected {
            pts: [a, b, c],
            colours: tri.map(|i| CUBE_COLOURS[i]),
            depth: tri.iter().map(|&i| screen[i].1).sum::<f32>() / 3.0,
        });
    }

    out.sort_by(|l, r| r.depth.total_cmp(&l.depth));
}
