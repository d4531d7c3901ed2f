//! Plays the bundled hero rig in the terminal.
//!
//! ```text
//! cargo run --example playback [path/to/skeleton.json] [scale]
//! RUST_LOG=debug cargo run --example playback
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};

use marrow::prelude::*;
use marrow::LoaderSettings;

const HERO: &str = include_str!("../tests/data/hero.json");
const FPS: f32 = 30.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let scale = match args.next() {
        Some(s) => s.parse::<f32>().with_context(|| format!("invalid scale {s:?}"))?,
        None => 1.0,
    };

    let loader = SkeletonLoader::new(LoaderSettings { scale })?;
    let asset = match &path {
        Some(path) => loader
            .load_from_path(path)
            .with_context(|| format!("failed to load {path}"))?,
        None => loader.load_from_str(HERO)?,
    };

    println!(
        "{} bones, {} animations",
        asset.data().bones().len(),
        asset.animations().len()
    );
    for animation in asset.animations() {
        println!("  {:<12} {:.2}s", animation.name(), animation.duration());
    }

    let mut skeleton = asset.instantiate();
    let mut mixer = AnimationMixer::new();

    // first animation at full weight, second layered on top at half
    let mut layers = asset.animations().iter();
    if let Some(base) = layers.next() {
        mixer.add_action(AnimationAction::new(Arc::clone(base)));
    }
    if let Some(overlay) = layers.next() {
        mixer.add_action(
            AnimationAction::new(Arc::clone(overlay))
                .with_weight(0.5)
                .with_loop_mode(LoopMode::PingPong),
        );
    }

    let frames = (FPS * 2.0) as usize;
    for frame in 0..=frames {
        skeleton.set_to_setup_pose();
        if frame > 0 {
            mixer.update(1.0 / FPS, &mut skeleton);
        } else {
            mixer.apply(&mut skeleton);
        }

        if frame % 10 != 0 {
            continue;
        }
        println!("\nframe {frame} (t = {:.2}s)", frame as f32 / FPS);
        for (data, bone) in skeleton.data().bones().iter().zip(skeleton.bones()) {
            let BoneTransform {
                rotation,
                translation,
                scale,
            } = bone.local;
            println!(
                "  {:<12} rot {:>8.2}  pos ({:>7.2}, {:>7.2})  scale ({:.2}, {:.2})",
                data.name, rotation, translation.x, translation.y, scale.x, scale.y
            );
        }
    }

    Ok(())
}
