//! Mount a preset headlessly and scroll it top to bottom, logging section changes.
//!
//! `RUST_LOG` is not consulted; everything at debug and above is printed.

use std::rc::Rc;

use scrollreel::{
    Engine, FrameClock, ProgressSource, RecordingHost, RecordingRenderer, ScrollMetrics,
    SlotPresenter, scene::presets,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data_foundry".to_string());
    let scene = presets::by_name(&name)?;

    let host = Rc::new(RecordingHost::new());
    let source = ProgressSource::new();
    let presenter = SlotPresenter::new(scene.overlay, scene.section_count())?;
    let mut engine = Engine::mount(
        &scene,
        RecordingRenderer::new(),
        host.clone(),
        &source,
        presenter,
    )?;
    engine.resize(1280.0, 720.0);

    let viewport_h = 720.0;
    let travel = (scene.scroll_height_vh / 100.0 - 1.0) * viewport_h;
    let frames = 600u64;
    let mut mounted = None;
    for n in 0..=frames {
        let scroll_y = travel * n as f64 / frames as f64;
        source.update(&ScrollMetrics::for_scroll(
            scroll_y,
            scene.scroll_height_vh,
            viewport_h,
        ));
        engine.frame(FrameClock::nth(n, 60.0));

        let now = engine.presenter().mounted().map(|c| c.index);
        if now != mounted {
            match engine.presenter().mounted() {
                Some(card) => println!(
                    "frame {n:>3}  progress {:.3}  {}  {}",
                    engine.progress().get(),
                    card.counter,
                    card.record.title
                ),
                None => println!(
                    "frame {n:>3}  progress {:.3}  (no card)",
                    engine.progress().get()
                ),
            }
            mounted = now;
        }
    }

    println!(
        "{} frames, {} objects, {} renderer writes, {} listeners held",
        engine.frames(),
        engine.render_loop().object_count(),
        engine.renderer().writes(),
        host.active()
    );
    drop(engine);
    println!("after unmount: {} listeners held", host.active());
    Ok(())
}
