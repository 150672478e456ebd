//! Small styled primitives shared by the views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider};
