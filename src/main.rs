use std::env;

use clipstage::prelude::*;
use clipstage::Scene;

const DEFAULT_OUTPUT: &str = "clipstage.png";
const COLOR_BACKGROUND: u32 = 0xFF20_2020;

/// A triangle fan poking out of every side of the view volume, with a line
/// and a point, drawn when no scene file is given.
const BUILTIN_SCENE: &str = r#"{
    "state": {
        "viewport": { "x": 0, "y": 0, "width": 640, "height": 480 },
        "lighting_enabled": true
    },
    "primitives": [
        { "triangle": [
            { "position": [-1.6, -0.8, 0.0, 1.0], "color": [1.0, 0.2, 0.2, 1.0] },
            { "position": [ 1.4, -1.5, 0.2, 1.0], "color": [0.2, 1.0, 0.2, 1.0] },
            { "position": [ 0.1,  1.8, 0.4, 1.0], "color": [0.2, 0.2, 1.0, 1.0] }
        ] },
        { "triangle": [
            { "position": [-0.5, -0.5, -1.5, 1.0], "color": [1.0, 1.0, 0.0, 1.0] },
            { "position": [ 0.5, -0.5,  0.5, 1.0], "color": [1.0, 1.0, 0.0, 1.0] },
            { "position": [ 0.0,  0.5,  0.5, 1.0], "color": [1.0, 1.0, 0.0, 1.0] }
        ] },
        { "line": [
            { "position": [-3.0, 0.9, 0.0, 1.0], "color": [1.0, 1.0, 1.0, 1.0] },
            { "position": [ 3.0, 0.9, 0.0, 1.0], "color": [1.0, 1.0, 1.0, 1.0] }
        ] },
        { "point": { "position": [0.9, -0.9, 0.0, 1.0] } }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let scene = match args.next() {
        Some(path) => Scene::load(&path)?,
        None => Scene::from_json(BUILTIN_SCENE)?,
    };
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let viewport = scene.state.viewport;
    let width = (viewport.x().max(0) as u32) + viewport.width();
    let height = (viewport.y().max(0) as u32) + viewport.height();

    let mut framebuffer = FrameBuffer::new(width, height);
    framebuffer.clear(COLOR_BACKGROUND);

    let mut ctx = Context::new(scene.state.clone(), framebuffer);
    scene.render(&mut ctx);

    let stats = ctx.stats();
    println!("primitives:  {}", scene.primitives.len());
    println!(
        "drawn:       {} points, {} lines, {} triangles ({} textured)",
        stats.points, stats.lines, stats.triangles, stats.textured_triangles
    );
    println!("pixels:      ~{}", stats.pixels);
    println!(
        "discarded:   {} outside, {} degenerate, {} culled, {} numerical",
        stats.outside, stats.degenerate, stats.culled, stats.numerical
    );

    if let Some(hit) = ctx.selection().open_hit() {
        println!("selection:   min {:#010x} max {:#010x}", hit.min, hit.max);
    }

    ctx.rasterizer()
        .save(&output)
        .map_err(clipstage::SceneError::from)?;
    println!("wrote {output}");

    Ok(())
}
