/// Cleans free text before it reaches storage.
///
/// Harmless inline formatting (`<b>`, `<i>`, ...) survives, scripts and
/// event-handler attributes are dropped, and bare `& < >` come back as
/// entities. Cleaning already-clean text returns it unchanged.
pub fn clean(input: &str) -> String {
    ammonia::clean(input)
}
