use crate::models::page::{Page, PageSection};

pub static PAGES: [Page; 3] = [
    Page {
        slug: "site-notice",
        title: "Site Notice",
        sections: &[
            PageSection {
                heading: "Information pursuant to § 5 TMG",
                body: "coworking.live",
            },
            PageSection {
                heading: "Disclaimer",
                body: "The contents of our pages have been created with the utmost care. However, we cannot guarantee the \
                       contents' accuracy, completeness, or topicality.",
            },
            PageSection {
                heading: "Copyright",
                body: "Our web pages and their contents are subject to German copyright law. Unless expressly permitted by \
                       law, every form of utilizing, reproducing or processing works subject to copyright protection on our \
                       web pages requires the prior consent of the respective owner of the rights.",
            },
        ],
    },
    Page {
        slug: "privacy",
        title: "Privacy Policy",
        sections: &[
            PageSection {
                heading: "Data Protection",
                body: "We take the protection of your personal data very seriously. We treat your personal data \
                       confidentially and in accordance with the statutory data protection regulations and this privacy policy.",
            },
            PageSection {
                heading: "Information Collection",
                body: "We collect the information you provide when you create or join a session, such as your display name.",
            },
            PageSection {
                heading: "Use of Information",
                body: "Information is used to run sessions and to show hosts who would like to join.",
            },
            PageSection {
                heading: "Third-Party Services",
                body: "The map view is rendered by an external mapping service.",
            },
            PageSection {
                heading: "Your Rights",
                body: "You may request information about, correction of, or deletion of your personal data at any time.",
            },
            PageSection {
                heading: "Contact",
                body: "If you have any questions about this Privacy Policy, please contact us at privacy@coworking.live",
            },
        ],
    },
    Page {
        slug: "terms",
        title: "Terms of Service",
        sections: &[
            PageSection {
                heading: "Acceptance of Terms",
                body: "By accessing and using coworking.live, you accept and agree to be bound by the terms and provision of \
                       this agreement.",
            },
            PageSection {
                heading: "Use License",
                body: "Permission is granted to temporarily use coworking.live for personal, non-commercial transitory \
                       viewing only.",
            },
            PageSection {
                heading: "User Conduct",
                body: "Be respectful to other participants and keep sessions focused on work.",
            },
            PageSection {
                heading: "Session Hosting",
                body: "Hosts are responsible for the sessions they create and for approving join requests.",
            },
            PageSection {
                heading: "Limitation of Liability",
                body: "In no event shall coworking.live or its suppliers be liable for any damages arising out of the use or \
                       inability to use the materials on our website.",
            },
            PageSection {
                heading: "Modifications",
                body: "coworking.live may revise these terms of service at any time without notice.",
            },
            PageSection {
                heading: "Contact Information",
                body: "If you have any questions about these Terms of Service, please contact us at terms@coworking.live",
            },
        ],
    },
];

pub fn find_page(slug: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_is_reachable_by_slug() {
        for page in &PAGES {
            assert_eq!(find_page(page.slug).map(|p| p.title), Some(page.title));
            assert!(!page.sections.is_empty());
        }
    }

    #[test]
    fn unknown_slug() {
        assert!(find_page("cookies").is_none());
    }
}
