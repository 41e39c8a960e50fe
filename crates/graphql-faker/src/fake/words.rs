pub(super) const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amelia", "Boris", "Carmen", "Chen", "Dmitri", "Elena", "Fatima", "Grace", "Hiro", "Ines",
    "Jonas", "Kofi", "Lena", "Marco", "Nadia", "Oscar", "Priya", "Quentin", "Rosa", "Sven", "Tariq", "Uma",
    "Victor", "Wanda", "Xavier", "Yara", "Zoe",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Anderson", "Berg", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Hopper", "Ivanova", "Jensen",
    "Kowalski", "Lovelace", "Moreau", "Nakamura", "Okafor", "Petrov", "Quinn", "Rossi", "Schmidt", "Tanaka",
    "Usman", "Varga", "Wong", "Young", "Zhang",
];

pub(super) const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Product Manager", "Data Analyst", "Account Executive", "Designer", "Support Specialist",
    "Operations Lead", "Marketing Coordinator", "Technical Writer", "Site Reliability Engineer",
];

pub(super) const CITIES: &[&str] = &[
    "Amsterdam", "Berlin", "Buenos Aires", "Cairo", "Helsinki", "Kyoto", "Lagos", "Lisbon", "Melbourne",
    "Montreal", "Nairobi", "Oslo", "Prague", "Seoul", "Toronto", "Valparaiso", "Vienna", "Zurich",
];

pub(super) const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Boulevard", "Way", "Court", "Place"];

/// Country names with their ISO 3166-1 alpha-2 codes.
pub(super) const COUNTRIES: &[(&str, &str)] = &[
    ("Argentina", "AR"),
    ("Australia", "AU"),
    ("Brazil", "BR"),
    ("Canada", "CA"),
    ("Egypt", "EG"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("India", "IN"),
    ("Japan", "JP"),
    ("Kenya", "KE"),
    ("Mexico", "MX"),
    ("Nigeria", "NG"),
    ("Norway", "NO"),
    ("Portugal", "PT"),
    ("South Korea", "KR"),
    ("Spain", "ES"),
    ("Ukraine", "UA"),
];

pub(super) const COLORS: &[&str] = &[
    "azure", "black", "coral", "cyan", "gold", "indigo", "ivory", "lavender", "lime", "magenta", "maroon", "navy",
    "olive", "orange", "orchid", "plum", "salmon", "teal", "turquoise", "violet",
];

pub(super) const PRODUCT_CATEGORIES: &[&str] = &[
    "Books", "Electronics", "Garden", "Grocery", "Health", "Home", "Jewelry", "Kids", "Music", "Outdoors",
    "Shoes", "Sports", "Tools", "Toys",
];

pub(super) const PRODUCT_ADJECTIVES: &[&str] = &[
    "Awesome", "Ergonomic", "Generic", "Handcrafted", "Intelligent", "Practical", "Refined", "Rustic", "Sleek",
    "Small", "Tasty", "Unbranded",
];

pub(super) const PRODUCT_MATERIALS: &[&str] = &[
    "Bronze", "Concrete", "Cotton", "Fresh", "Frozen", "Granite", "Metal", "Plastic", "Rubber", "Steel", "Wooden",
];

pub(super) const PRODUCT_NOUNS: &[&str] = &[
    "Bacon", "Bike", "Chair", "Cheese", "Chips", "Computer", "Gloves", "Hat", "Keyboard", "Mouse", "Pants",
    "Pizza", "Shirt", "Shoes", "Table", "Towels",
];

pub(super) const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Labs", "Partners"];

pub(super) const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Centralized", "Distributed", "Enhanced", "Focused", "Integrated", "Multi-layered",
    "Persistent", "Reactive", "Robust", "Streamlined",
];

pub(super) const CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "client-driven", "dynamic", "global", "heuristic", "modular",
    "real-time", "scalable", "value-added", "zero tolerance",
];

pub(super) const CATCH_PHRASE_NOUNS: &[&str] = &[
    "ability", "architecture", "benchmark", "capability", "framework", "hierarchy", "infrastructure",
    "initiative", "interface", "middleware", "paradigm", "throughput",
];

pub(super) const CURRENCY_CODES: &[&str] = &[
    "AUD", "BRL", "CAD", "CHF", "CNY", "EUR", "GBP", "INR", "JPY", "KES", "MXN", "NOK", "SEK", "USD", "ZAR",
];

pub(super) const EMAIL_PROVIDERS: &[&str] = &["example.com", "example.net", "example.org", "mail.test"];

pub(super) const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "io", "dev", "info"];

/// File extensions with their MIME types.
pub(super) const FILE_TYPES: &[(&str, &str)] = &[
    ("csv", "text/csv"),
    ("gif", "image/gif"),
    ("html", "text/html"),
    ("jpg", "image/jpeg"),
    ("json", "application/json"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("txt", "text/plain"),
    ("zip", "application/zip"),
];

pub(super) const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do", "eiusmod",
    "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam",
    "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo",
    "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt",
    "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];
