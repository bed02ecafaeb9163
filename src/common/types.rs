/// Page ID type
///
/// A page is identified by a non-negative integer. The engine places no
/// upper bound on page values; the reference-string generator constrains
/// them to `[0, max_page)` but the simulators accept any sequence.
pub type Page = u32;
