// src/main.rs
use anyhow::Result;
use clap::Parser;
use glam::Vec2;
use tracing::info;

use trellis::color;
use trellis::{
    Align, Alignment, BoxConstraints, ConstrainedBox, Elevate, Fill, Flex, Flexible,
    DrawSink, MainAxisAlignment, MainAxisSize, PositionBox, RecordingSink, RenderContext, Stack,
    Widget,
};

#[derive(Parser)]
#[command(name = "trellis-demo", about = "Lays out and renders the demo widget tree")]
struct Args {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,
}

/// A reusable composite: a min-width row holding a square block and a
/// height-capped column of two bars.
fn info_card() -> Box<dyn Widget> {
    Box::new(ConstrainedBox::new(
        BoxConstraints::new(150.0, f32::INFINITY, 0.0, f32::INFINITY),
        Some(Box::new(
            Flex::row(vec![
                Box::new(Fill::new(Vec2::new(40.0, 40.0), color::from_hex(0xFF0000FF))),
                Box::new(ConstrainedBox::new(
                    BoxConstraints::tight_h(40.0),
                    Some(Box::new(
                        Flex::column(vec![
                            Box::new(Fill::new(Vec2::new(100.0, 15.0), color::from_hex(0xFF0000FF))),
                            Box::new(Fill::new(Vec2::new(90.0, 15.0), color::from_hex(0xFF0000FF))),
                        ])
                        .with_main_axis_alignment(MainAxisAlignment::SpaceAround),
                    )),
                )),
            ])
            .with_main_axis_size(MainAxisSize::Min)
            .with_main_axis_alignment(MainAxisAlignment::SpaceBetween),
        )),
    ))
}

fn demo_tree() -> Stack {
    Stack::new(vec![
        Box::new(Align::new(
            Alignment::BOTTOM_RIGHT,
            Box::new(
                Flex::column(vec![
                    Box::new(
                        Flexible::expanded(Box::new(Fill::new(
                            Vec2::new(300.0, 20.0),
                            color::from_hex(0xFF0000FF),
                        )))
                        .flex(2),
                    ),
                    Box::new(
                        Flexible::expanded(Box::new(Fill::new(
                            Vec2::new(140.0, 30.0),
                            color::from_hex(0x00FF00FF),
                        )))
                        .flex(1),
                    ),
                    Box::new(Fill::new(Vec2::new(500.0, 50.0), color::from_hex(0x0000FFFF))),
                    Box::new(Fill::new(Vec2::new(400.0, 100.0), color::from_hex(0xFFFF00FF))),
                    Box::new(Fill::new(Vec2::new(250.0, 20.0), color::from_hex(0x00FFFFFF))),
                    Box::new(Fill::new(Vec2::new(200.0, 50.0), color::from_hex(0x000000FF))),
                    info_card(),
                ])
                .with_main_axis_size(MainAxisSize::Min),
            ),
        )),
        Box::new(
            PositionBox::new(
                Vec2::new(140.0, 40.0),
                Box::new(Elevate::new(
                    10.0,
                    Box::new(Fill::new(Vec2::new(200.0, 200.0), color::from_hex(0xFF88FFFF))),
                )),
            )
            .absolute(),
        ),
    ])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let viewport = Vec2::new(args.width, args.height);

    let mut root = demo_tree();
    root.measure(&BoxConstraints::tight(viewport));

    let mut sink = RecordingSink::new();
    {
        let mut ctx = RenderContext::new(&mut sink);
        root.render(&mut ctx);
    }
    sink.flush()?;

    info!(
        viewport_w = viewport.x,
        viewport_h = viewport.y,
        primitives = sink.primitives().len(),
        "frame complete"
    );
    for prim in sink.primitives() {
        println!(
            "rect at ({:.1}, {:.1}) size {:.1}x{:.1} depth {:.1}",
            prim.origin.x, prim.origin.y, prim.size.x, prim.size.y, prim.depth
        );
    }
    Ok(())
}
