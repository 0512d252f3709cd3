//! Message processing
//!
//! Runs a message through [`handler::update`] and keeps feeding the
//! follow-up messages back in until the chain ends.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use pack_core::prelude::*;

/// Upper bound on follow-ups per message. A chain this long is a handler bug.
const MAX_FOLLOW_UPS: usize = 16;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    let mut steps = 0;
    while let Some(m) = msg {
        if steps > MAX_FOLLOW_UPS {
            warn!("Dropping follow-up message after {} steps: {:?}", steps, m);
            break;
        }
        msg = handler::update(state, m).message;
        steps += 1;
    }
}
