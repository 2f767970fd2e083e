use crate::drawable::{Drawable, DrawableId, DrawableType};

/// Committed drawables plus the redo buffer.
///
/// `commit`, `undo`, `redo` and `clear` are the only ways to change either
/// sequence. Undo and redo on an empty stack are silent no-ops.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Drawables in paint order
    committed: Vec<DrawableType>,
    /// Undone drawables, most recently undone last
    redo_stack: Vec<DrawableType>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable. Any pending redo entries are discarded.
    pub fn commit(&mut self, drawable: DrawableType) {
        log::debug!(
            "Committing {} {} (dropping {} redo entries)",
            drawable.kind(),
            drawable.id(),
            self.redo_stack.len()
        );
        self.committed.push(drawable);
        self.redo_stack.clear();
    }

    /// Move the last committed drawable onto the redo stack.
    /// Returns the moved drawable, or `None` when there was nothing to undo.
    pub fn undo(&mut self) -> Option<&DrawableType> {
        let drawable = self.committed.pop()?;
        log::debug!("Undo {} {}", drawable.kind(), drawable.id());
        self.redo_stack.push(drawable);
        self.redo_stack.last()
    }

    /// Move the most recently undone drawable back to the committed list.
    /// Returns the moved drawable, or `None` when there was nothing to redo.
    pub fn redo(&mut self) -> Option<&DrawableType> {
        let drawable = self.redo_stack.pop()?;
        log::debug!("Redo {} {}", drawable.kind(), drawable.id());
        self.committed.push(drawable);
        self.committed.last()
    }

    /// Drop everything, committed and undone alike
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing history ({} committed, {} redo)",
            self.committed.len(),
            self.redo_stack.len()
        );
        self.committed.clear();
        self.redo_stack.clear();
    }

    pub fn committed(&self) -> &[DrawableType] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[DrawableType] {
        &self.redo_stack
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// The drawable of an in-progress gesture: the last committed one, and
    /// only if it is still `id`.
    pub(crate) fn active_mut(&mut self, id: DrawableId) -> Option<&mut DrawableType> {
        self.committed.last_mut().filter(|drawable| drawable.id() == id)
    }
}
