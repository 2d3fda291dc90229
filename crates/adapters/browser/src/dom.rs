//! DOM element handles and page lookup.

use wasm_bindgen::JsCast;

use portfolio_app::ports::{PageElement, PageElements};
use portfolio_domain::click::ClickTarget;
use portfolio_domain::contract::PageContract;
use portfolio_domain::error::{DomError, PortfolioError};

use crate::error::describe;

/// A page element driven through its class list and inline style.
#[derive(Debug, Clone)]
pub struct DomElement(web_sys::Element);

impl DomElement {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    /// The underlying element, e.g. for registering listeners.
    #[must_use]
    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl PageElement for DomElement {
    fn add_class(&self, class: &str) -> Result<(), PortfolioError> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|err| class_list_error(class, &err))
    }

    fn remove_class(&self, class: &str) -> Result<(), PortfolioError> {
        self.0
            .class_list()
            .remove_1(class)
            .map_err(|err| class_list_error(class, &err))
    }

    fn set_background_image(&self, path: &str) -> Result<(), PortfolioError> {
        let Some(html) = self.0.dyn_ref::<web_sys::HtmlElement>() else {
            return Err(DomError::Style {
                property: BACKGROUND_IMAGE,
                reason: format!("<{}> has no inline style", self.0.tag_name()),
            }
            .into());
        };
        html.style()
            .set_property(BACKGROUND_IMAGE, &css_url(path))
            .map_err(|err| {
                DomError::Style {
                    property: BACKGROUND_IMAGE,
                    reason: describe(&err),
                }
                .into()
            })
    }
}

const BACKGROUND_IMAGE: &str = "background-image";

fn class_list_error(class: &str, err: &wasm_bindgen::JsValue) -> PortfolioError {
    DomError::ClassList {
        class: class.to_string(),
        reason: describe(err),
    }
    .into()
}

/// Quote `path` as a CSS `url()` value.
fn css_url(path: &str) -> String {
    let escaped = path.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{escaped}\")")
}

/// Capture the first element carrying each contract class, plus `<body>`.
#[must_use]
pub fn find_page_elements(
    document: &web_sys::Document,
    contract: &PageContract,
) -> PageElements<DomElement> {
    let first = |class: &str| {
        let found = document
            .get_elements_by_class_name(class)
            .item(0)
            .map(DomElement::new);
        if found.is_none() {
            tracing::debug!(class, "no element with class on page");
        }
        found
    };
    PageElements {
        body: document.body().map(|body| DomElement::new(body.into())),
        menu: first(&contract.menu_class),
        theme_button: first(&contract.theme_button_class),
        hamburger_button: first(&contract.hamburger_button_class),
    }
}

/// The classes of the element a click was dispatched to.
///
/// Text nodes and non-element targets yield an empty target. The `class`
/// attribute is read rather than `className` so SVG icons work too.
#[must_use]
pub fn click_target(event: &web_sys::Event) -> ClickTarget {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.get_attribute("class"))
        .map(|classes| ClickTarget::from_class_attribute(&classes))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_path_in_quoted_url() {
        assert_eq!(
            css_url("assets/images/theme-dark.svg"),
            "url(\"assets/images/theme-dark.svg\")"
        );
    }

    #[test]
    fn should_escape_quotes_and_backslashes_in_url() {
        assert_eq!(css_url(r#"a"b\c.png"#), r#"url("a\"b\\c.png")"#);
    }

    #[test]
    fn should_keep_spaces_inside_quoted_url() {
        assert_eq!(css_url("my icons/menu.png"), "url(\"my icons/menu.png\")");
    }
}
