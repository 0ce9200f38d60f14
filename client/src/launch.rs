
use lazy_static::lazy_static;

use std::sync::Mutex;

use arcade::Setup;
use utils::*;

///
/// What a cabinet needs at load time but cannot be handed through the window loop: 
/// the font bytes and the validated game options.
///
#[derive(Clone, Debug, Default)]
pub struct Launch 
{
    pub font: & 'static [u8],
    pub setup: Setup
}

lazy_static!
{
    static ref LAUNCH : Mutex<Option<Launch>> = Mutex::new(None);
}

impl Launch 
{
    ///
    /// Returns the launch record, erroring if it was never initialized.
    ///
    pub fn current () -> Result<Launch>
    {
        let launch = LAUNCH.lock().map_err(|_| error::error!("The launch record is poisoned."))?;
        launch.clone().ok_or_else(|| error::error!("The launch record was never initialized."))
    }

    ///
    /// Unwraps a launch record, logging the error and falling back to an empty 
    /// record if there is none.
    ///
    pub fn or_default (launch: Result<Launch>) -> Launch 
    {
        launch.unwrap_or_else(|e| 
        {
            log::error!("{:#}", e);
            Launch::default()
        })
    }

    ///
    /// Initializes the launch record; only the first call has any effect.
    ///
    pub fn initialize (font: & 'static [u8], setup: Setup) -> Result<()>
    {
        let mut launch = LAUNCH.lock().map_err(|_| error::error!("The launch record is poisoned."))?;
        if launch.is_none()
        {
            * launch = Some(Launch { font, setup });
        }
        Ok(())
    }
}
