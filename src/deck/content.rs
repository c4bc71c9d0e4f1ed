//! Slide texts for the Ghost Protocol deck.
//!
//! Bullet glyphs are part of the strings. Empty strings are blank spacer
//! paragraphs; a leading two-space indent marks a pricing detail line.

pub const TITLE: &str = "Ghost Protocol";
pub const SUBTITLE: &str = "Enterprise-Grade Digital Solutions for Strategic Transformation";

pub const ABOUT_TITLE: &str = "About Ghost Protocol";
pub const ABOUT_LINES: &[&str] = &[
    "• Established presence in premium IT solutions and digital transformation",
    "• Specialized expertise in enterprise-scale web development and custom software engineering",
    "• Trusted partner for mission-critical infrastructure and digital infrastructure optimization",
    "",
    "Core Values:",
    "• Technical Excellence: Unwavering commitment to architecture and code quality",
    "• Strategic Partnership: Long-term client success over transactional relationships",
    "• Operational Integrity: Transparent, accountable, and results-driven delivery",
];

pub const SERVICES_TITLE: &str = "Products & Services";
pub const SERVICES_LINES: &[&str] = &[
    "Solutions Tailored for Enterprise Environments:",
    "",
    "• Web Development: Full-stack applications, scalable architectures, cloud-native solutions",
    "",
    "• Software Engineering: Custom applications, API design, system integration, legacy modernization",
    "",
    "• Digital Infrastructure: Cloud architecture optimization, DevOps strategy, security hardening",
    "",
    "• Strategic Consulting: Technology roadmapping, architecture design, digital transformation planning",
];

pub const VALUE_TITLE: &str = "Strategic Value";
pub const VALUE_LINES: &[&str] = &[
    "Differentiated Value Proposition:",
    "",
    "• Specialized Expertise: Deep technical knowledge in enterprise-grade systems and complex requirements",
    "",
    "• Operational Excellence: Proven ability to deliver high-quality solutions on schedule and within specifications",
    "",
    "• Long-Term Partnership: Committed to understanding your strategic objectives and contributing to sustained success",
    "",
    "• Scalability & Future-Proofing: Solutions architected for growth, supporting your evolution and market expansion",
];

pub const PRICING_TITLE: &str = "Investment & Engagement Models";
pub const PRICING_LINES: &[&str] = &[
    "Flexible engagement models tailored to project scope and timeline:",
    "",
    "• Project-Based Engagements",
    "  Fixed scope, deliverables, and timeline with transparent cost structure",
    "",
    "• Time & Materials (T&M)",
    "  Flexible resource allocation for evolving requirements",
    "",
    "• Retainer Partnerships",
    "  Ongoing strategic support and optimization services",
    "",
    "Detailed proposal and pricing structure to be prepared by sales team",
];
