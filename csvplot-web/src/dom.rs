/// Read/write access to the page, injected so handlers never reach for the
/// global `document`.
pub trait PageDocument {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

pub trait PageElement {
    fn set_inner_html(&self, html: &str);
}

impl PageDocument for web_sys::Document {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.get_element_by_id(id)
    }
}

impl PageElement for web_sys::Element {
    fn set_inner_html(&self, html: &str) {
        web_sys::Element::set_inner_html(self, html)
    }
}
