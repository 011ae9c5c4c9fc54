/// A `pagehide` only tears the page down when it is not headed for the
/// back/forward cache; a cached page resumes later with its state intact.
#[inline]
pub fn is_teardown(persisted: bool) -> bool {
    !persisted
}
