// src/ui/widgets/mod.rs

// Declare all of our widget modules here.
pub mod emergency_popup;  // "In Immediate Danger?" modal.
pub mod footer;           // Key hints for the current context.
pub mod harassment_view;  // Harassment detector panel.
pub mod input;            // Shared text input box.
pub mod notification;     // Toasts.
pub mod privacy_view;     // Privacy scanner panel.
pub mod resources_view;   // Emergency resources panel.
pub mod tabs;             // Tool tab bar.
