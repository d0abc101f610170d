use crate::gui::painter;
use cairo::Context;
use folio::geometry::{Point, Size};
use folio::scene::{BackgroundScene, SceneConfig};
use folio::schedule::{CancellationToken, FrameLoop, FrameOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Hero background: particle cloud and floating cubes, stepped once per frame.
pub struct SceneView {
    frames: FrameLoop<BackgroundScene>,
}

impl SceneView {
    pub fn new(viewport: Size, token: CancellationToken) -> Self {
        let mut rng = StdRng::from_os_rng();
        let scene = BackgroundScene::new(SceneConfig::default(), viewport, &mut rng);
        Self {
            frames: FrameLoop::new(scene, token),
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.frames
            .task_mut()
            .resize(Size::new(f64::from(width), f64::from(height)));
    }

    pub fn pointer_moved(&mut self, position: Point) {
        self.frames.task_mut().pointer_moved(position);
    }

    pub fn frame(&mut self) -> FrameOutcome {
        self.frames.tick()
    }

    pub fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        painter::replay(cr, &self.frames.task().draw())
    }
}
