//! Static, read-only directory of crisis-support services and safety tips.
//! Nothing here is computed; the tables are fixed at build time.

use crate::core::models::EmergencyContact;

/// The number dialled by the "In Immediate Danger?" action.
pub const EMERGENCY_NUMBER: &str = "911";

static EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "National Domestic Violence Hotline",
        description: "24/7 confidential support for domestic violence survivors",
        phone: Some("1-800-799-7233"),
        website: Some("https://www.thehotline.org"),
        available_24h: true,
    },
    EmergencyContact {
        name: "Crisis Text Line",
        description: "Free 24/7 crisis support via text message",
        phone: Some("Text HOME to 741741"),
        website: None,
        available_24h: true,
    },
    EmergencyContact {
        name: "RAINN National Sexual Assault Hotline",
        description: "Confidential support from trained staff",
        phone: Some("1-800-656-4673"),
        website: Some("https://www.rainn.org"),
        available_24h: true,
    },
    EmergencyContact {
        name: "Cyber Civil Rights Initiative",
        description: "Support for victims of non-consensual intimate images",
        phone: None,
        website: Some("https://www.cybercivilrights.org"),
        available_24h: false,
    },
];

static SAFETY_TIPS: &[&str] = &[
    "Document all incidents with screenshots and timestamps",
    "Keep records of harassing messages or posts",
    "Use privacy settings to limit who can contact you",
    "Trust your instincts - if something feels wrong, seek help",
    "Create a safety plan with trusted friends or family",
    "Consider using a different device for safety research",
];

pub fn emergency_contacts() -> &'static [EmergencyContact] {
    EMERGENCY_CONTACTS
}

pub fn safety_tips() -> &'static [&'static str] {
    SAFETY_TIPS
}

/// `tel:` URI for the emergency services number.
pub fn emergency_dial_uri() -> String {
    format!("tel:{}", EMERGENCY_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_four_contacts_in_fixed_order() {
        let names: Vec<&str> = emergency_contacts().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "National Domestic Violence Hotline",
                "Crisis Text Line",
                "RAINN National Sexual Assault Hotline",
                "Cyber Civil Rights Initiative",
            ]
        );
    }

    #[test]
    fn directory_has_six_tips_in_fixed_order() {
        assert_eq!(
            safety_tips(),
            [
                "Document all incidents with screenshots and timestamps",
                "Keep records of harassing messages or posts",
                "Use privacy settings to limit who can contact you",
                "Trust your instincts - if something feels wrong, seek help",
                "Create a safety plan with trusted friends or family",
                "Consider using a different device for safety research",
            ]
        );
    }

    #[test]
    fn repeated_reads_return_the_same_tables() {
        assert_eq!(emergency_contacts(), emergency_contacts());
        assert_eq!(safety_tips(), safety_tips());
    }

    #[test]
    fn only_the_civil_rights_initiative_lacks_phone_and_round_the_clock_service() {
        let cci = &emergency_contacts()[3];
        assert!(cci.phone.is_none());
        assert!(!cci.available_24h);
        assert!(cci.dial_uri().is_none());
        assert!(emergency_contacts()[..3].iter().all(|c| c.available_24h));
    }

    #[test]
    fn dial_uris_use_the_tel_scheme() {
        assert_eq!(emergency_contacts()[0].dial_uri().as_deref(), Some("tel:1-800-799-7233"));
        assert_eq!(emergency_dial_uri(), "tel:911");
    }
}
