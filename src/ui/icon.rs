use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons referenced directly by components. Section copy in
/// `core::content` names its own icons.
pub mod icons {
    pub const TRUCK: &str = "truck";
    pub const HOME: &str = "home";
    pub const INFO: &str = "info";
    pub const SERVICES: &str = "tool";
    pub const BUILDING: &str = "building";
    pub const GLOBE: &str = "globe";
    pub const HELP_CIRCLE: &str = "help-circle";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const SEND: &str = "send";
    pub const TARGET: &str = "target";
    pub const EYE: &str = "eye";
}
