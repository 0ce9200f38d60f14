
use coffee::{Game, Timer};
use coffee::graphics::{Font, Frame, Window, WindowSettings};
use coffee::load::Task;

use arcade::{Screen, Snapshot};

use super::canvas::{self, Canvas};
use super::launch::Launch;
use super::states::InputState;

use utils::*;

///
/// Runs one screen in a window at a fixed tick rate.
///
/// Frames and ticks are not in lockstep: presses seen across several frames are 
/// collected in `pending` and handed to exactly one update, after which they are 
/// forgotten.
///
pub struct Cabinet<S: Screen>
{
    screen: S,
    font: Font,
    pending: Snapshot
}

///
/// Opens a window for the screen and runs it until the window closes.
///
pub fn play<S: Screen + 'static> () -> Result<()>
{
    log::info!("Starting {}.", S::TITLE);

    Cabinet::<S>::run(
        WindowSettings 
        {
            title: S::TITLE.to_owned(),
            size: S::SIZE,
            resizable: false,
            fullscreen: false,
            maximized: false
        }
    )
    .map_err(|e| error::error!("{} stopped: {:?}", S::TITLE, e))
}

impl<S: Screen + 'static> Game for Cabinet<S>
{
    type Input = InputState;
    type LoadingScreen = ();

    const TICKS_PER_SECOND : u16 = 60;

    fn draw (& mut self, frame: & mut Frame, timer: & Timer)
    {
        if ! timer.has_ticked()
        {
            return;
        }

        frame.clear(canvas::color(self.screen.background()));

        let mut canvas = Canvas::new(& mut self.font);
        self.screen.draw(& mut canvas);
        canvas.finish(& mut frame.as_target());
    }

    fn interact (& mut self, input: & mut InputState, _window: & mut Window)
    {
        self.pending.absorb(input.snapshot());
    }

    fn load (_window: & Window) -> Task<Cabinet<S>>
    {
        // Without a launch record the error is logged, the font bytes are empty and loading fails.

        let launch = Launch::or_default(Launch::current());

        Task::using_gpu(
            move |gpu| 
            {
                let font = Font::from_bytes(gpu, launch.font)?;
                Ok(Cabinet { screen: S::new(& launch.setup), font, pending: Snapshot::new() })
            }
        )
    }

    fn update (& mut self, _window: & Window)
    {
        self.screen.update(& self.pending);
        self.pending.settle();
    }
}
