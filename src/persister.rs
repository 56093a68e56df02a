use tracing::info;

use crate::api::{RemoteApi, Transport};
use crate::error::{Fault, ValidationError};
use crate::models::{non_blank, NewSession, Session};
use crate::projector::SessionDraft;

/// Submits the whole draft tree in one creation call.
///
/// On success the draft's notes and items are cleared (date and title stay
/// for the next entry). On failure the draft is left exactly as it was.
pub fn commit<T: Transport>(draft: &mut SessionDraft, api: &RemoteApi<T>) -> Result<Session, Fault> {
    let title = non_blank(&draft.workout_title).ok_or(ValidationError::EmptyWorkoutTitle)?;
    let created = api.create_session(&NewSession {
        date_str: draft.date_str,
        workout_title: title,
        notes: non_blank(&draft.notes),
        items: &draft.items,
    })?;
    info!(id = %created.id, date = %created.date_str, items = created.items.len(), "session logged");

    draft.notes.clear();
    draft.items.clear();
    Ok(created)
}
