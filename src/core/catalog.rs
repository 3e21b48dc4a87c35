//! Static catalog of the tools SafeGuard offers.
//! Each entry carries the copy shown in the tab bar and in the header of the
//! tool's panel, so the UI never hard-codes descriptive text.

use std::fmt;
use strum::EnumIter;

/// The three tools, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Tool {
    #[default]
    Privacy,
    Harassment,
    Emergency,
}

/// Human-friendly name, used for tab titles.
impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", tool_detail(*self).title)
    }
}

/// All the descriptive copy attached to a tool.
pub struct ToolDetail {
    /// Tab title.
    pub title: &'static str,
    /// One-line subtitle shown in the panel header.
    pub tagline: &'static str,
    /// Longer pitch shown while the tool is idle.
    pub description: &'static str,
    /// Placeholder text for the tool's input field, if it has one.
    pub placeholder: Option<&'static str>,
}

static TOOLS: &[ToolDetail] = &[
    ToolDetail {
        title: "Privacy Scanner",
        tagline: "Analyze your social media privacy settings for potential vulnerabilities",
        description: "Analyze your social media settings for privacy vulnerabilities and get personalized recommendations.",
        placeholder: Some("Enter your profile URL or username"),
    },
    ToolDetail {
        title: "Harassment Detection",
        tagline: "Analyze messages, comments, or content for potential harassment or threats",
        description: "AI-powered analysis to identify threatening or harassing content before it affects you.",
        placeholder: Some("Paste the message, comment, or content you want to analyze..."),
    },
    ToolDetail {
        title: "Emergency Resources",
        tagline: "Immediate support and crisis intervention services",
        description: "Quick access to crisis support services and safety planning tools when you need help.",
        placeholder: None,
    },
];

/// Looks up the catalog entry for `tool`.
pub fn tool_detail(tool: Tool) -> &'static ToolDetail {
    // Every variant has an entry; the match keeps that checked at compile time.
    match tool {
        Tool::Privacy => &TOOLS[0],
        Tool::Harassment => &TOOLS[1],
        Tool::Emergency => &TOOLS[2],
    }
}

impl Tool {
    pub fn next(self) -> Self {
        match self {
            Tool::Privacy => Tool::Harassment,
            Tool::Harassment => Tool::Emergency,
            Tool::Emergency => Tool::Privacy,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tool::Privacy => Tool::Emergency,
            Tool::Harassment => Tool::Privacy,
            Tool::Emergency => Tool::Harassment,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_tool_maps_to_its_own_entry() {
        for (position, tool) in Tool::iter().enumerate() {
            assert_eq!(tool.index(), position);
            assert!(std::ptr::eq(tool_detail(tool), &TOOLS[position]));
        }
        let titles: Vec<&str> = Tool::iter().map(|t| tool_detail(t).title).collect();
        assert_eq!(titles, ["Privacy Scanner", "Harassment Detection", "Emergency Resources"]);
    }

    #[test]
    fn tab_cycling_wraps_both_ways() {
        assert_eq!(Tool::Emergency.next(), Tool::Privacy);
        assert_eq!(Tool::Privacy.previous(), Tool::Emergency);
        for tool in Tool::iter() {
            assert_eq!(tool.next().previous(), tool);
        }
    }

    #[test]
    fn default_tab_is_the_privacy_scanner() {
        assert_eq!(Tool::default(), Tool::Privacy);
        assert_eq!(Tool::Privacy.to_string(), "Privacy Scanner");
    }
}
