//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// A headline figure in the problem section.
pub struct Stat {
    pub figure: &'static str,
    pub caption: &'static str,
}

/// A titled blurb, used for both the feature and benefit grids.
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A quote in the testimonial section.
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        figure: "55 Million",
        caption: "People living with dementia globally",
    },
    Stat {
        figure: "Every 3 Seconds",
        caption: "A new case of dementia is diagnosed",
    },
    Stat {
        figure: "139 Million",
        caption: "Projected cases by 2050",
    },
];

const FEATURES: &[Feature] = &[
    Feature {
        title: "Privacy First",
        description: "End-to-end encryption and strict data protection protocols",
    },
    Feature {
        title: "Real-time Monitoring",
        description: "Instant updates and continuous health tracking",
    },
    Feature {
        title: "Smart Notifications",
        description: "Customizable alerts for caregivers and healthcare providers",
    },
];

const STEPS: &[Feature] = &[
    Feature {
        title: "Early Detection",
        description: "AI-powered analysis of behavioral patterns for early signs of cognitive decline",
    },
    Feature {
        title: "24/7 Monitoring",
        description: "Continuous tracking of daily activities and vital signs for comprehensive care",
    },
    Feature {
        title: "Smart Alerts",
        description: "Instant notifications for caregivers about important changes or concerns",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dr. Sarah Chen",
        role: "Neurologist",
        content: "MemoTag has revolutionized how we monitor and care for dementia patients.",
    },
    Testimonial {
        name: "James Wilson",
        role: "Caregiver",
        content: "The peace of mind this platform provides is invaluable.",
    },
    Testimonial {
        name: "Maria Rodriguez",
        role: "Healthcare Administrator",
        content: "A game-changer in dementia care management.",
    },
];

const BENEFITS: &[Feature] = &[
    Feature {
        title: "Privacy Focused",
        description: "Your data is protected with enterprise-grade security",
    },
    Feature {
        title: "24/7 Support",
        description: "Round-the-clock assistance whenever you need it",
    },
    Feature {
        title: "Industry Leading",
        description: "Recognized for innovation in healthcare technology",
    },
];

/// Template for the landing page.
///
/// Renders `templates/home.html` with every marketing section: hero, problem
/// stats, features, how-it-works steps, testimonials, benefits, the contact
/// form, CTA, and footer.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    stats: &'static [Stat],
    features: &'static [Feature],
    steps: &'static [Feature],
    testimonials: &'static [Testimonial],
    benefits: &'static [Feature],
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {
        stats: STATS,
        features: FEATURES,
        steps: STEPS,
        testimonials: TESTIMONIALS,
        benefits: BENEFITS,
    }
}
