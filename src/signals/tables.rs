//! Process-wide read-only lookup tables

/// Keywords counted once each when found anywhere in lowercase page text
pub const AI_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "neural network",
    "mlops",
    "llm",
    "large language model",
    "generative ai",
    "genai",
    "gpt",
    "nlp",
    "natural language processing",
    "computer vision",
    "data science",
    "predictive analytics",
    "chatbot",
    "automation",
];

/// Substrings in a link's href or text that mark it as a careers page
pub const JOB_LINK_KEYWORDS: &[&str] = &[
    "career", "careers", "jobs", "openings", "vacancy", "hiring", "join-us", "joinus",
];

/// Substring that marks a link as a pricing page
pub const PRICING_KEYWORD: &str = "pricing";

/// Ordered (technology, signatures) rules matched against lowercase raw HTML
///
/// A rule fires when any one of its signatures is present.
pub const TECH_SIGNATURES: &[(&str, &[&str])] = &[
    ("WordPress", &["wp-content", "wp-includes"]),
    ("Shopify", &["cdn.shopify", "myshopify.com"]),
    ("WooCommerce", &["woocommerce"]),
    ("React", &["react-dom", "data-reactroot", "react.production"]),
    ("Next.js", &["__next", "_next/static"]),
    ("Angular", &["ng-version", "angular"]),
    ("Vue.js", &["vue.js", "vue.min.js", "data-v-"]),
    ("Django", &["csrfmiddlewaretoken", "django"]),
    ("Flask", &["flask"]),
    ("Docker", &["docker"]),
    ("AWS", &["amazonaws.com", "aws"]),
    ("Azure", &["azure", "windows.net"]),
    ("GCP/Google", &["googleapis.com", "gstatic.com", "google cloud"]),
];

/// Technologies that earn the modern-stack bonus
pub const MODERN_STACK: &[&str] = &[
    "React",
    "Next.js",
    "Docker",
    "AWS",
    "GCP/Google",
    "Flask",
    "Django",
];
