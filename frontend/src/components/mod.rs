pub mod ai_modal;
pub mod faq;
pub mod landing;
pub mod nav;
pub mod reveal;
pub mod toast;
