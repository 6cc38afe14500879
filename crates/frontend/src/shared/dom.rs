//! Access to data blocks embedded in the host page

/// Text content of the element with the given id.
///
/// Returns `None` outside a browser or when the element is missing.
pub fn embedded_text(element_id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(element_id)?.text_content()
}
