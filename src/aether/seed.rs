//! The two notes a fresh session starts with. They reference each other, and
//! their links are derived by the store like any other edit.

use crate::error::Result;
use crate::model::{Note, NoteKind};
use crate::store::DataStore;

pub const WELCOME_TITLE: &str = "Welcome to AetherNotes";
pub const ABOUT_LINKING_TITLE: &str = "About Linking";

const WELCOME_HTML: &str = "<h1>Welcome to AetherNotes!</h1>\
<p>This is your personal knowledge system. Here's how to get started:</p>\
<ul>\
<li>Create new notes: text, audio, or sketch.</li>\
<li>Link notes together by typing <strong>[[Note Title]]</strong> in a text note. \
For example, here is a link to the [[About Linking]] note.</li>\
<li>View your knowledge graph. It updates as you write.</li>\
</ul>\
<p>Happy thinking!</p>";

const ABOUT_LINKING_HTML: &str = "<h2>Connecting Ideas</h2>\
<p>When you link to a note, like [[Welcome to AetherNotes]], a connection is formed. \
This helps you discover relationships between your thoughts.</p>\
<p>The graph visualizes these connections, creating a map of your knowledge.</p>";

/// Adds the welcome notes and makes "Welcome to AetherNotes" active.
///
/// Returns the notes as stored, welcome first.
pub fn seed_welcome<S: DataStore>(store: &mut S) -> Result<Vec<Note>> {
    let about = store.create(NoteKind::Text);
    let welcome = store.create(NoteKind::Text);

    // Titles first so each body can resolve the other
    store.update(&about.id, String::new(), Some(ABOUT_LINKING_TITLE.to_string()))?;
    store.update(&welcome.id, String::new(), Some(WELCOME_TITLE.to_string()))?;
    let about = store.update(&about.id, ABOUT_LINKING_HTML.to_string(), None)?;
    let welcome = store.update(&welcome.id, WELCOME_HTML.to_string(), None)?;

    store.set_active(Some(welcome.id))?;
    Ok(vec![welcome, about])
}
