//! Copy for the informational pages: help center, services and driver
//! verification. Both front-ends render these tables; only markup differs.

#[derive(Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FaqCategory {
    pub title: &'static str,
    pub faqs: &'static [Faq],
}

/// Titled paragraph used for service cards, verification steps and benefits.
#[derive(Debug, PartialEq, Eq)]
pub struct Block {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PageBody {
    Help(&'static [FaqCategory]),
    Services(&'static [Block]),
    DriverVerification {
        steps: &'static [Block],
        benefits: &'static [Block],
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct StaticPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: PageBody,
}

pub const HELP: &str = "help";
pub const SERVICES: &str = "services";
pub const DRIVER_VERIFICATION: &str = "driver-verification";

static HELP_CATEGORIES: [FaqCategory; 4] = [
    FaqCategory {
        title: "Getting started",
        faqs: &[
            Faq {
                question: "How do I create an account?",
                answer: "Sign up with your name, email and a password, then enter the 6-digit code we email you to verify your address.",
            },
            Faq {
                question: "I did not receive my verification code.",
                answer: "Check your spam folder first. You can request a new code from the verification page once the 30-second timer runs out.",
            },
            Faq {
                question: "Why do you need my phone number?",
                answer: "Drivers and riders use it to coordinate pickups. It is only shared with the people in your confirmed rides.",
            },
        ],
    },
    FaqCategory {
        title: "Booking rides",
        faqs: &[
            Faq {
                question: "How do I find a ride?",
                answer: "Enter your pickup point, destination and time. We show drivers heading your way with free seats.",
            },
            Faq {
                question: "Can I cancel a booking?",
                answer: "Yes. Cancelling more than 2 hours before departure is free; later cancellations may carry a small fee that goes to the driver.",
            },
        ],
    },
    FaqCategory {
        title: "Payments",
        faqs: &[
            Faq {
                question: "How is the fare calculated?",
                answer: "Drivers share fuel and toll costs across the seats they offer. The price per seat is shown before you book.",
            },
            Faq {
                question: "When am I charged?",
                answer: "Your card is authorised when the driver accepts and charged once the ride is completed.",
            },
        ],
    },
    FaqCategory {
        title: "Safety",
        faqs: &[
            Faq {
                question: "Are drivers verified?",
                answer: "Every driver passes identity, licence and vehicle checks before offering rides. Verified drivers carry a badge on their profile.",
            },
            Faq {
                question: "How do I report a problem with a ride?",
                answer: "Open the ride from your dashboard and choose Report an issue. Our support team answers within 24 hours.",
            },
        ],
    },
];

static SERVICE_BLOCKS: [Block; 4] = [
    Block {
        title: "Daily commute",
        description: "Share your regular route to work with neighbours and split the cost every day.",
    },
    Block {
        title: "Intercity trips",
        description: "Travel between cities with drivers already making the journey, at a fraction of the train fare.",
    },
    Block {
        title: "Airport transfers",
        description: "Catch a ride to or from the airport with travellers on the same schedule.",
    },
    Block {
        title: "Event rides",
        description: "Coordinate rides to concerts, matches and festivals with other attendees.",
    },
];

static VERIFICATION_STEPS: [Block; 4] = [
    Block {
        title: "Confirm your identity",
        description: "Upload a government-issued ID and take a quick selfie so we can match them.",
    },
    Block {
        title: "Add your driving licence",
        description: "We check that your licence is valid and held for at least one year.",
    },
    Block {
        title: "Register your vehicle",
        description: "Provide registration and insurance documents for the car you will drive.",
    },
    Block {
        title: "Background check",
        description: "A standard background check runs in the background; most drivers are approved within 48 hours.",
    },
];

static VERIFICATION_BENEFITS: [Block; 3] = [
    Block {
        title: "Verified badge",
        description: "Riders book verified drivers up to three times more often.",
    },
    Block {
        title: "Priority in search",
        description: "Your rides appear first when riders search your route.",
    },
    Block {
        title: "Faster payouts",
        description: "Verified drivers receive their share of fares within one business day.",
    },
];

pub static PAGES: [StaticPage; 3] = [
    StaticPage {
        slug: HELP,
        title: "Help Center",
        summary: "Answers to the most common questions about accounts, bookings, payments and safety.",
        body: PageBody::Help(&HELP_CATEGORIES),
    },
    StaticPage {
        slug: SERVICES,
        title: "Our Services",
        summary: "Ways to share the road, from the daily commute to a one-off trip.",
        body: PageBody::Services(&SERVICE_BLOCKS),
    },
    StaticPage {
        slug: DRIVER_VERIFICATION,
        title: "Become a Verified Driver",
        summary: "Earn riders' trust and fill your empty seats faster.",
        body: PageBody::DriverVerification {
            steps: &VERIFICATION_STEPS,
            benefits: &VERIFICATION_BENEFITS,
        },
    },
];

#[must_use]
pub fn page(slug: &str) -> Option<&'static StaticPage> {
    let slug = slug.trim().trim_matches('/');
    PAGES.iter().find(|page| page.slug == slug)
}

/// Case-insensitive search over help questions and answers. Returns the
/// category title with each match; a blank query matches nothing.
#[must_use]
pub fn search_help(query: &str) -> Vec<(&'static str, &'static Faq)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    HELP_CATEGORIES
        .iter()
        .flat_map(|category| category.faqs.iter().map(move |faq| (category.title, faq)))
        .filter(|(_, faq)| {
            faq.question.to_lowercase().contains(&query)
                || faq.answer.to_lowercase().contains(&query)
        })
        .collect()
}
