//! Headless cube field demo
//!
//! Runs a spawn area for a fixed number of frames against a host that only
//! counts the calls it receives, and logs a summary every simulated second.
//!
//! Usage: `cube_demo [config.ron|config.toml] [frames] [dt]`

use spawn_engine::foundation::logging;
use spawn_engine::prelude::*;

const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Host that tallies calls instead of drawing
#[derive(Debug, Default)]
struct CountingHost {
    live: usize,
    instantiated: u64,
    destroyed: u64,
    transform_updates: u64,
    color_updates: u64,
}

impl RenderHost for CountingHost {
    fn instantiate(&mut self, _handle: ObjectHandle) {
        self.live += 1;
        self.instantiated += 1;
    }

    fn destroy(&mut self, _handle: ObjectHandle) {
        self.live = self.live.saturating_sub(1);
        self.destroyed += 1;
    }

    fn set_active(&mut self, _handle: ObjectHandle, _active: bool) {}

    fn set_transform(&mut self, _handle: ObjectHandle, _transform: &Transform) {
        self.transform_updates += 1;
    }

    fn set_color(&mut self, _handle: ObjectHandle, _color: Vec4) {
        self.color_updates += 1;
    }

    fn set_area_transform(&mut self, _transform: &Transform) {}
}

struct DemoArgs {
    config: SpawnAreaConfig,
    frames: u64,
    dt: f32,
}

impl DemoArgs {
    fn parse() -> Result<Self, Box<dyn std::error::Error>> {
        let mut args = std::env::args().skip(1);

        let config = match args.next() {
            Some(path) => {
                log::info!("Loading spawn config from {path}");
                SpawnAreaConfig::load_from_file(&path)?
            }
            None => SpawnAreaConfig::default(),
        };
        let frames = args.next().map(|s| s.parse()).transpose()?.unwrap_or(DEFAULT_FRAMES);
        let dt = args.next().map(|s| s.parse()).transpose()?.unwrap_or(DEFAULT_DT);

        Ok(Self { config, frames, dt })
    }
}

struct CubeDemoApp {
    area: SpawnArea,
    host: CountingHost,
    clock: FrameClock,
    frames: u64,
    frames_per_report: u64,
}

impl CubeDemoApp {
    fn new(args: DemoArgs) -> Result<Self, SpawnError> {
        let mut host = CountingHost::default();
        let area = SpawnArea::from_config(args.config, &mut host)?;

        let mut debug_draw = DebugDraw::new();
        area.debug_draw(&mut debug_draw);
        for shape in debug_draw.shapes() {
            log::debug!("Debug shape: {shape:?}");
        }

        Ok(Self {
            area,
            host,
            clock: FrameClock::fixed(args.dt),
            frames: args.frames,
            frames_per_report: (1.0 / args.dt).round().max(1.0) as u64,
        })
    }

    fn run(mut self) {
        for _ in 0..self.frames {
            let dt = self.clock.advance();
            self.area.tick(dt, &mut self.host);

            if self.clock.frame_count() % self.frames_per_report == 0 {
                self.report();
            }
        }

        self.report();
        self.area.shutdown(&mut self.host);
        log::info!(
            "Finished: {} instantiated, {} destroyed, {} transform updates, {} color updates",
            self.host.instantiated,
            self.host.destroyed,
            self.host.transform_updates,
            self.host.color_updates
        );
    }

    fn report(&self) {
        let stats = self.area.stats();
        log::info!(
            "t={:.1}s active={} pooled={} live={} created={} reused={} destroyed={}",
            self.clock.total_time(),
            self.area.active_count(),
            self.area.pool_len(),
            self.host.live,
            stats.created,
            stats.reused,
            stats.destroyed
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting cube field demo");

    let args = DemoArgs::parse()?;
    let app = CubeDemoApp::new(args)?;
    app.run();

    Ok(())
}
