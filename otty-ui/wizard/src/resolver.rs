/// Map a content scroll position to a step index.
///
/// The index is the position `scroll_pos` would take if inserted into the
/// ascending `offsets`. A position sitting exactly on a boundary belongs to
/// the step that starts there, not the one that ends there.
///
/// The result ranges over `0..=offsets.len()`; callers must range-check it
/// against the step count before acting on it.
pub fn resolve(scroll_pos: f32, offsets: &[f32]) -> usize {
    if let Some(index) = offsets.iter().position(|offset| *offset == scroll_pos)
    {
        return index + 1;
    }

    offsets.iter().filter(|offset| **offset < scroll_pos).count()
}
