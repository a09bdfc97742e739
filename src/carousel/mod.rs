//! Carousel Controller - one authoritative slide index
//!
//! Reconciles manual navigation, dot activation, keyboard arrows, swipes,
//! hover and autoplay into a single current index, and keeps the render
//! signals (offset, control disabled flags, dots) consistent with it.
//!
//! # Concurrency
//!
//! The controller lives on one thread. The autoplay timer runs on its own
//! thread but only posts ticks into the controller's queue; they are applied
//! in arrival order by [`Carousel::pump`], interleaved with any events other
//! threads sent through [`Carousel::sender`]. Last write wins.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::{Carousel, CarouselConfig, CarouselEvent};
//! use spark_signals::effect;
//!
//! let mut carousel = Carousel::new(vec!["Ada", "Grace", "Linus"], CarouselConfig::default())?;
//!
//! let render = carousel.render_signal();
//! let _stop = effect(move || {
//!     let state = render.get();
//!     println!("track: {}", state.css_transform());
//! });
//!
//! carousel.handle(CarouselEvent::Next);
//! loop {
//!     carousel.pump_timeout(std::time::Duration::from_millis(100));
//! }
//! ```

mod events;
mod render;

pub use events::CarouselEvent;
pub use render::RenderState;

use std::fmt;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use spark_signals::{signal, Signal};
use tracing::{debug, trace, warn};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::state::{
    AutoplayTimer, GestureTracker, KeyboardEvent, NavKey, PauseReasons, PauseState,
    PauseTransition, PointerAction, PointerEvent, Swipe, ViewportRect,
};

// =============================================================================
// CAROUSEL
// =============================================================================

/// Carousel controller over a fixed set of slides.
pub struct Carousel<T> {
    slides: Vec<T>,
    config: CarouselConfig,

    // Reactive outputs
    index: Signal<usize>,
    render_state: Signal<RenderState>,
    dots: Vec<Signal<bool>>,
    in_view: Signal<bool>,

    // Autoplay
    autoplay_enabled: bool,
    pause: PauseState,
    timer: Option<AutoplayTimer>,
    generation: u64,

    gesture: GestureTracker,

    // Serialized event queue
    events_tx: Sender<CarouselEvent>,
    events_rx: Receiver<CarouselEvent>,

    disposed: bool,
}

impl<T> Carousel<T> {
    /// Build a carousel over `slides`.
    ///
    /// Fails with [`CarouselError::NoSlides`] for an empty set. Renders the
    /// first slide and starts autoplay when `config.autoplay` is set.
    pub fn new(slides: Vec<T>, config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }

        let len = slides.len();
        let (events_tx, events_rx) = mpsc::channel();

        let mut carousel = Self {
            index: signal(0),
            render_state: signal(RenderState::compute(0, len, config.slides_per_view)),
            dots: (0..len).map(|i| signal(i == 0)).collect(),
            in_view: signal(true),
            autoplay_enabled: false,
            pause: PauseState::new(),
            timer: None,
            generation: 0,
            gesture: GestureTracker::new(config.swipe_threshold),
            events_tx,
            events_rx,
            disposed: false,
            slides,
            config,
        };

        carousel.render();
        if carousel.config.autoplay {
            carousel.start_autoplay()?;
        }

        debug!(slides = len, autoplay = carousel.config.autoplay, "carousel mounted");
        Ok(carousel)
    }

    /// Like [`Carousel::new`], but declines to activate instead of failing.
    ///
    /// A missing slide set is the expected "feature not on this page" case
    /// and is only logged at debug level.
    pub fn mount(slides: Vec<T>, config: CarouselConfig) -> Option<Self> {
        match Self::new(slides, config) {
            Ok(carousel) => Some(carousel),
            Err(CarouselError::NoSlides) => {
                debug!("no slides found, carousel not activated");
                None
            }
            Err(err) => {
                warn!(error = %err, "carousel not activated");
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed carousel.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    pub fn current_slide(&self) -> &T {
        &self.slides[self.current_index()]
    }

    /// Current index as a signal, for effects.
    pub fn index_signal(&self) -> Signal<usize> {
        self.index.clone()
    }

    pub fn render_state(&self) -> RenderState {
        self.render_state.get()
    }

    /// Render state as a signal, for effects.
    pub fn render_signal(&self) -> Signal<RenderState> {
        self.render_state.clone()
    }

    /// One active flag per dot indicator, in slide order.
    pub fn dot_signals(&self) -> &[Signal<bool>] {
        &self.dots
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        self.dots.get(index).map(|dot| dot.get()).unwrap_or(false)
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view.get()
    }

    /// Autoplay is wanted (it may still be paused).
    pub fn is_autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// A timer is currently running.
    pub fn is_autoplay_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| t.is_running())
    }

    pub fn pause_reasons(&self) -> PauseReasons {
        self.pause.reasons()
    }

    /// Generation of the running timer, if any.
    pub fn timer_generation(&self) -> Option<u64> {
        self.timer.as_ref().map(|t| t.generation())
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Sender for posting events from other threads. Apply them with `pump`.
    pub fn sender(&self) -> Sender<CarouselEvent> {
        self.events_tx.clone()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Show slide `index`.
    ///
    /// Rejects out-of-range indices without touching state.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        let len = self.len();
        if index >= len {
            warn!(index, len, "go_to index out of range");
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        self.index.set(index);
        self.render();
        debug!(index, "carousel go_to");
        Ok(())
    }

    /// Advance one slide. Does not wrap. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let index = self.current_index();
        if index + 1 < self.len() {
            self.index.set(index + 1);
            self.render();
            debug!(index = index + 1, "carousel next");
            true
        } else {
            trace!(index, "next at last slide");
            false
        }
    }

    /// Go back one slide. Does not wrap. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let index = self.current_index();
        if index > 0 {
            self.index.set(index - 1);
            self.render();
            debug!(index = index - 1, "carousel previous");
            true
        } else {
            trace!("previous at first slide");
            false
        }
    }

    /// Push the current index out to the render signals.
    pub fn render(&mut self) {
        if self.disposed {
            return;
        }
        let index = self.current_index();
        self.render_state
            .set(RenderState::compute(index, self.len(), self.config.slides_per_view));
        for (i, dot) in self.dots.iter().enumerate() {
            dot.set(i == index);
        }
    }

    // -------------------------------------------------------------------------
    // Autoplay
    // -------------------------------------------------------------------------

    /// Enable autoplay and (re)start the timer.
    ///
    /// A running timer is replaced. While a pause reason is active the timer
    /// is deferred until the pause set clears.
    pub fn start_autoplay(&mut self) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        self.autoplay_enabled = true;
        if self.pause.is_paused() {
            debug!(reasons = ?self.pause.reasons(), "autoplay deferred while paused");
            self.cancel_timer();
            return Ok(());
        }
        self.restart_timer()
    }

    /// Disable autoplay and cancel the timer. Idempotent.
    pub fn stop_autoplay(&mut self) {
        self.autoplay_enabled = false;
        self.cancel_timer();
    }

    /// One autoplay step: advance, or wrap to the first slide at the end.
    pub fn autoplay_tick(&mut self) {
        if self.disposed {
            return;
        }
        if self.current_index() + 1 < self.len() {
            self.next();
        } else {
            self.index.set(0);
            self.render();
            debug!("autoplay wrapped to first slide");
        }
    }

    fn restart_timer(&mut self) -> Result<()> {
        self.cancel_timer();
        self.generation += 1;
        let timer = AutoplayTimer::spawn(
            self.config.autoplay_interval(),
            self.generation,
            self.events_tx.clone(),
        )?;
        debug!(generation = self.generation, "autoplay timer started");
        self.timer = Some(timer);
        Ok(())
    }

    fn cancel_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
            debug!(generation = timer.generation(), "autoplay timer stopped");
        }
    }

    fn pause_for(&mut self, reason: PauseReasons) {
        if self.pause.insert(reason) == PauseTransition::Paused {
            self.cancel_timer();
        }
    }

    fn resume_from(&mut self, reason: PauseReasons) {
        if self.pause.remove(reason) == PauseTransition::Resumed && self.autoplay_enabled {
            if let Err(err) = self.restart_timer() {
                warn!(error = %err, "autoplay could not resume");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Record a swipe start and pause autoplay for the gesture.
    pub fn on_gesture_start(&mut self, x: f32) {
        if self.disposed {
            return;
        }
        self.gesture.begin(x);
        self.pause_for(PauseReasons::GESTURE);
    }

    /// Resolve the swipe ending at `x`, then release the gesture pause.
    ///
    /// Returns the swipe that was recognised, if any. An end without a start
    /// is ignored.
    pub fn on_gesture_end(&mut self, x: f32) -> Option<Swipe> {
        if self.disposed {
            return None;
        }
        let Some(swipe) = self.gesture.end(x) else {
            trace!(x, "gesture end without start");
            return None;
        };
        match swipe {
            Some(Swipe::Next) => {
                self.next();
            }
            Some(Swipe::Previous) => {
                self.previous();
            }
            None => trace!(x, "swipe below threshold"),
        }
        self.resume_from(PauseReasons::GESTURE);
        swipe
    }

    pub fn on_pointer_enter(&mut self) {
        if self.config.pause_on_hover && !self.disposed {
            self.pause_for(PauseReasons::HOVER);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if self.config.pause_on_hover && !self.disposed {
            self.resume_from(PauseReasons::HOVER);
        }
    }

    /// Route a pointer event to the gesture or hover handlers.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event.action {
            PointerAction::Down => self.on_gesture_start(event.x),
            PointerAction::Up => {
                self.on_gesture_end(event.x);
            }
            PointerAction::Enter => self.on_pointer_enter(),
            PointerAction::Leave => self.on_pointer_leave(),
        }
    }

    /// Arrow-key navigation while the carousel is in view.
    ///
    /// Returns true if the key was a navigation key and was handled.
    pub fn on_key(&mut self, event: &KeyboardEvent) -> bool {
        if self.disposed || !self.config.keyboard || !self.is_in_view() {
            return false;
        }
        match NavKey::from_event(event) {
            Some(NavKey::Previous) => {
                self.previous();
                true
            }
            Some(NavKey::Next) => {
                self.next();
                true
            }
            None => false,
        }
    }

    /// Update visibility from the root's position in the window.
    pub fn set_viewport(&mut self, rect: ViewportRect, window_height: f32) {
        self.set_in_view(rect.intersects_window(window_height));
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        if self.disposed {
            return;
        }
        self.in_view.set(in_view);
    }

    // -------------------------------------------------------------------------
    // Event queue
    // -------------------------------------------------------------------------

    /// Apply one event. Ignored after `dispose`.
    pub fn handle(&mut self, event: CarouselEvent) {
        if self.disposed {
            trace!(?event, "event after dispose");
            return;
        }
        match event {
            CarouselEvent::Previous => {
                self.previous();
            }
            CarouselEvent::Next => {
                self.next();
            }
            CarouselEvent::Dot(index) => {
                // Rejection is logged by go_to
                let _ = self.go_to(index);
            }
            CarouselEvent::Key(key) => {
                self.on_key(&key);
            }
            CarouselEvent::Pointer(pointer) => self.on_pointer(pointer),
            CarouselEvent::Viewport { rect, window_height } => {
                self.set_viewport(rect, window_height)
            }
            CarouselEvent::InView(in_view) => self.set_in_view(in_view),
            CarouselEvent::AutoplayTick { generation } => {
                if self.timer_generation() == Some(generation) {
                    self.autoplay_tick();
                } else {
                    trace!(generation, "stale autoplay tick dropped");
                }
            }
        }
    }

    /// Apply every queued event without blocking. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Wait up to `timeout` for an event, then drain the queue.
    pub fn pump_timeout(&mut self, timeout: Duration) -> usize {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.handle(event);
                1 + self.pump()
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => 0,
        }
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Stop the timer. Later events and direct calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.stop_autoplay();
        self.pause.clear();
        self.gesture.cancel();
        self.disposed = true;
        debug!("carousel disposed");
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

impl<T> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.len())
            .field("index", &self.current_index())
            .field("autoplay_enabled", &self.autoplay_enabled)
            .field("pause", &self.pause.reasons())
            .field("timer", &self.timer)
            .field("disposed", &self.disposed)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
