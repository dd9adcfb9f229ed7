//! Game state machine check, run once per tick after every other mutation.

use log::info;

use skyshield_core::enums::GameStatus;
use skyshield_core::events::AudioEvent;

use crate::session::Session;

/// Transition a running session to `Lost` when no emplacement is active.
/// Returns true on the tick the transition happens.
pub fn run(session: &mut Session, audio_events: &mut Vec<AudioEvent>) -> bool {
    if session.status != GameStatus::Running || !session.all_emplacements_inactive() {
        return false;
    }
    session.status = GameStatus::Lost;
    audio_events.push(AudioEvent::SessionEnd {
        score: session.score.points,
    });
    info!(
        "session lost at tick {} with score {}",
        session.time.tick, session.score.points
    );
    true
}
