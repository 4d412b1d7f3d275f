//! Client hooks.

use crate::term::Surface;
use crate::types::Key;

/// Lifecycle and input hooks implemented by an application.
///
/// The engine calls these from the single thread that drives the loop. All
/// drawing goes through the `&mut Surface` handed to `on_create` and
/// `on_update`.
pub trait App {
    /// Called once after the surface is opened. Returning `false` skips the
    /// tick loop; `on_destroy` still runs.
    fn on_create(&mut self, surface: &mut Surface) -> bool;

    /// Called once per tick with the seconds elapsed since the previous tick.
    /// Returning `false` ends the loop.
    fn on_update(&mut self, surface: &mut Surface, dt: f32) -> bool;

    /// Called at most once per tick, before `on_update`, when key polling is enabled.
    fn on_keypress(&mut self, _key: Key) {}

    /// Called exactly once per run. The result is reported, not acted upon.
    fn on_destroy(&mut self) -> bool {
        true
    }
}

impl<A: App + ?Sized> App for Box<A> {
    fn on_create(&mut self, surface: &mut Surface) -> bool {
        (**self).on_create(surface)
    }

    fn on_update(&mut self, surface: &mut Surface, dt: f32) -> bool {
        (**self).on_update(surface, dt)
    }

    fn on_keypress(&mut self, key: Key) {
        (**self).on_keypress(key)
    }

    fn on_destroy(&mut self) -> bool {
        (**self).on_destroy()
    }
}
