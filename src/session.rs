//! Session lifecycle for one reel attempt.
//!
//! A [`ReelSession`] owns the simulation state from cast to resolution.
//! The host drives it once per frame with [`ReelSession::tick`]; the
//! input adapter feeds it [`ReelSession::set_thrust`]. When the meter
//! fills or empties the session reports the outcome through the end
//! callback exactly once and goes inert. Abandoning a session with
//! [`ReelSession::stop`] also goes inert, without reporting.
//!
//! Sessions are one-shot: there is no reset. Start a new one to play
//! again.

#![allow(dead_code)]

use std::error::Error;
use std::fmt;
use std::time::Instant;

use rand::Rng;

use crate::minigame::logic::process_tick;
use crate::minigame::types::{Phase, ReelState};
use crate::species::{Species, SpeciesProfile};

/// Invoked once with `true` when the fish is landed, `false` when it
/// escapes.
pub type EndCallback = Box<dyn FnMut(bool)>;

/// Start-time failures. Nothing can fail once a session is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The requested identifier is not in the species catalog.
    UnknownSpecies(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownSpecies(id) => write!(f, "unknown species: {id:?}"),
        }
    }
}

impl Error for SessionError {}

/// A live reel attempt against one species.
pub struct ReelSession {
    species: Species,
    profile: &'static SpeciesProfile,
    state: ReelState,
    started_at: Instant,
    on_end: Option<EndCallback>,
    stopped: bool,
}

impl fmt::Debug for ReelSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReelSession")
            .field("species", &self.species)
            .field("profile", &self.profile)
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .field("on_end", &self.on_end.as_ref().map(|_| "<callback>"))
            .field("stopped", &self.stopped)
            .finish()
    }
}

impl ReelSession {
    /// Begin a session for the given species identifier.
    pub fn start(species_id: &str) -> Result<Self, SessionError> {
        let species = Species::from_id(species_id)
            .ok_or_else(|| SessionError::UnknownSpecies(species_id.to_string()))?;
        Ok(Self {
            species,
            profile: species.profile(),
            state: ReelState::new(),
            started_at: Instant::now(),
            on_end: None,
            stopped: false,
        })
    }

    /// Register the end-of-session callback. Replaces any previous one.
    pub fn set_on_end(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_end = Some(Box::new(callback));
    }

    /// Write the thrust flag. Safe to call at any time; ignored once the
    /// session is over, and repeat presses are naturally idempotent.
    pub fn set_thrust(&mut self, engaged: bool) {
        if self.is_over() {
            return;
        }
        self.state.thrust_engaged = engaged;
    }

    /// Advance one frame using wall-clock session time.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        let now_ms = self.started_at.elapsed().as_millis() as u64;
        self.tick_at(now_ms, rng);
    }

    /// Advance one frame at an explicit session time. This is the whole
    /// loop when driven headless (tests, balance simulations).
    pub fn tick_at(&mut self, now_ms: u64, rng: &mut impl Rng) {
        if self.is_over() {
            return;
        }
        process_tick(&mut self.state, self.profile, now_ms, rng);
        match self.state.phase {
            Phase::Won => self.finish(true),
            Phase::Lost => self.finish(false),
            Phase::Fishing => {}
        }
    }

    /// Stop scheduling before reporting, so a callback can never observe a
    /// session that would tick again.
    fn finish(&mut self, won: bool) {
        self.stopped = true;
        if let Some(mut callback) = self.on_end.take() {
            callback(won);
        }
    }

    /// External teardown: halt without reporting an outcome. Idempotent.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// True once the session has resolved or been stopped; ticks and
    /// input are ignored from then on.
    pub fn is_over(&self) -> bool {
        self.stopped || self.state.phase != Phase::Fishing
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn profile(&self) -> &SpeciesProfile {
        self.profile
    }

    /// Live view for rendering; safe to read at any time.
    pub fn state(&self) -> &ReelState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_start_unknown_species_fails() {
        let err = ReelSession::start("Unknown Fish").unwrap_err();
        assert_eq!(err, SessionError::UnknownSpecies("Unknown Fish".into()));
        assert!(err.to_string().contains("Unknown Fish"));
    }

    #[test]
    fn test_start_known_species() {
        let session = ReelSession::start("Carp").unwrap();
        assert_eq!(session.species(), Species::Carp);
        assert_eq!(session.phase(), Phase::Fishing);
        assert!(!session.is_over());
    }

    #[test]
    fn test_end_callback_fires_exactly_once() {
        let mut session = ReelSession::start("Carp").unwrap();
        let calls = Rc::new(Cell::new(0u32));
        let outcome = Rc::new(Cell::new(None));
        let (calls_tx, outcome_tx) = (Rc::clone(&calls), Rc::clone(&outcome));
        session.set_on_end(move |won| {
            calls_tx.set(calls_tx.get() + 1);
            outcome_tx.set(Some(won));
        });

        // Never thrusting: the bar sits at the floor while the carp idles
        // mid-track, so the meter drains to a loss.
        let mut rng = rng();
        let mut now_ms = 0;
        for _ in 0..10_000 {
            now_ms += 16;
            session.tick_at(now_ms, &mut rng);
        }

        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.get(), Some(false));
    }

    #[test]
    fn test_stop_is_idempotent_and_silent() {
        let mut session = ReelSession::start("Tuna").unwrap();
        let calls = Rc::new(Cell::new(0u32));
        let calls_tx = Rc::clone(&calls);
        session.set_on_end(move |_| calls_tx.set(calls_tx.get() + 1));

        let mut rng = rng();
        session.tick_at(16, &mut rng);
        session.stop();
        session.stop();

        assert!(session.is_over());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_no_mutation_after_stop() {
        let mut session = ReelSession::start("Octopus").unwrap();
        let mut rng = rng();
        session.tick_at(16, &mut rng);
        session.stop();

        let progress = session.state().progress;
        let bar_pos = session.state().bar_pos;
        session.set_thrust(true);
        for now_ms in 2..200 {
            session.tick_at(now_ms * 16, &mut rng);
        }

        assert!(!session.state().thrust_engaged);
        assert!((session.state().progress - progress).abs() < f64::EPSILON);
        assert!((session.state().bar_pos - bar_pos).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_thrust_reaches_physics() {
        let mut session = ReelSession::start("Carp").unwrap();
        let mut rng = rng();
        session.set_thrust(true);
        session.tick_at(16, &mut rng);
        assert!(session.state().bar_vel > 0.0);
        assert_eq!(session.state().hold_ticks, 1);

        session.set_thrust(false);
        session.tick_at(32, &mut rng);
        assert_eq!(session.state().hold_ticks, 0);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = ReelSession::start("Carp").unwrap();
        let mut rng = rng();
        for now_ms in 1..50 {
            first.tick_at(now_ms * 16, &mut rng);
        }
        let second = ReelSession::start("Carp").unwrap();
        assert!((second.state().progress - 20.0).abs() < f64::EPSILON);
        assert!(second.state().perfect);
    }

    #[test]
    fn test_terminal_exclusivity_across_species() {
        // Whatever happens, a session resolves to exactly one outcome and
        // the callback count matches.
        for (seed, species) in Species::ALL.iter().enumerate() {
            let mut session = ReelSession::start(species.name()).unwrap();
            let calls = Rc::new(Cell::new(0u32));
            let calls_tx = Rc::clone(&calls);
            session.set_on_end(move |_| calls_tx.set(calls_tx.get() + 1));

            let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
            let mut now_ms = 0u64;
            let mut tick = 0u64;
            while !session.is_over() && tick < 50_000 {
                now_ms += 16;
                tick += 1;
                // Blunt strategy: thrust whenever the bar is below the fish.
                let chase = session.state().bar_pos + 10.0 < session.state().fish_pos + 4.0;
                session.set_thrust(chase);
                session.tick_at(now_ms, &mut rng);
            }

            assert!(session.is_over(), "{} never resolved", species.name());
            assert!(matches!(session.phase(), Phase::Won | Phase::Lost));
            assert_eq!(calls.get(), 1, "{} callback count", species.name());
        }
    }
}
