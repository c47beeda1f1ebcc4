use dioxus::prelude::*;

/// Shown instead of the editor when a canvas cannot be opened
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { "{detail_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_title_and_message() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Could not open canvas".to_string(),
                message: "/tmp/plan.json".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Could not open canvas"));
        assert!(html.contains("/tmp/plan.json"));
        assert!(!html.contains("<pre"));
    }

    #[test]
    fn test_error_screen_renders_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Could not open canvas".to_string(),
                message: "/tmp/plan.json".to_string(),
                details: Some("EOF while parsing a string".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<pre"));
        assert!(html.contains("EOF while parsing a string"));
    }
}
