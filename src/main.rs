//! `litscene [OPTIONS_TOML]`: open the room viewer.
//!
//! Without a GPU backend the frames are summarized to the log; run with
//! `RUST_LOG=debug` to follow them.

use std::path::Path;

use litscene::{FrameData, FrameSink, Options, SceneError, Viewer};

/// Frames between summary lines.
const REPORT_INTERVAL: u64 = 120;

/// Sink that logs a summary of every `REPORT_INTERVAL`-th frame.
struct LogSink {
    frames: u64,
}

impl FrameSink for LogSink {
    fn submit(&mut self, frame: &FrameData) -> Result<(), SceneError> {
        self.frames += 1;
        if self.frames % REPORT_INTERVAL == 0 {
            log::debug!(
                "frame {}: eye {:?}, {} draws, {} lights",
                self.frames,
                frame.camera.position,
                frame.objects.len(),
                frame.lights.len()
            );
        }
        Ok(())
    }
}

fn load_options(arg: Option<String>) -> Result<Options, SceneError> {
    let Some(path) = arg else {
        return Ok(Options::default());
    };
    let options = Options::load(Path::new(&path))?;
    options.validate()?;
    log::info!("loaded options from {path}");
    Ok(options)
}

fn main() {
    env_logger::init();

    let options = match load_options(std::env::args().nth(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let viewer = Viewer::builder().with_options(options).build();
    if let Err(e) = viewer.run(LogSink { frames: 0 }) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
