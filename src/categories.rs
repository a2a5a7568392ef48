// src/categories.rs
//! Job categories searched on every run.

/// Query terms submitted to the search API, one sweep per term.
pub const CATEGORIES: &[&str] = &[
    // STEM related
    "science jobs",
    "technology jobs",
    "engineering jobs",
    "mathematics jobs",
    "STEM jobs",
    "biologist jobs",
    "chemist jobs",
    "physicist jobs",
    "software engineer jobs",
    "data scientist jobs",
    "mechanical engineer jobs",
    "electrical engineer jobs",
    "civil engineer jobs",
    "mathematician jobs",
    "statistician jobs",
    "actuary jobs",
    "artificial intelligence jobs",
    "machine learning jobs",
    "robotics jobs",
    "environmental scientist jobs",

    // Business & Finance
    "accounting jobs",
    "finance jobs",
    "auditor jobs",
    "bookkeeping jobs",
    "investment analyst jobs",
    "banking jobs",
    "tax accountant jobs",
    "loan officer jobs",

    // Sales & Marketing
    "sales representative jobs",
    "marketing jobs",
    "digital marketing jobs",
    "advertising jobs",
    "public relations jobs",
    "copywriter jobs",
    "social media manager jobs",
    "brand manager jobs",

    // Healthcare & Medical
    "registered nurse jobs",
    "doctor jobs",
    "pharmacist jobs",
    "physical therapist jobs",
    "occupational therapist jobs",
    "dentist jobs",
    "radiologic technologist jobs",
    "medical assistant jobs",
    "home health aide jobs",
    "speech-language pathologist jobs",
    "mental health counselor jobs",

    // Education & Training
    "teacher jobs",
    "professor jobs",
    "tutor jobs",
    "school counselor jobs",
    "special education teacher jobs",
    "curriculum developer jobs",
    "instructional designer jobs",

    // Customer Service & Support
    "customer service representative jobs",
    "call center jobs",
    "technical support jobs",
    "help desk jobs",
    "client relations jobs",

    // Human Resources & Administration
    "human resources jobs",
    "recruiter jobs",
    "training coordinator jobs",
    "payroll specialist jobs",
    "administrative assistant jobs",
    "office manager jobs",
    "data entry jobs",

    // Legal & Compliance
    "lawyer jobs",
    "paralegal jobs",
    "legal assistant jobs",
    "compliance officer jobs",
    "court reporter jobs",

    // Hospitality & Travel
    "hotel manager jobs",
    "event planner jobs",
    "flight attendant jobs",
    "travel agent jobs",
    "concierge jobs",
    "restaurant manager jobs",
    "chef jobs",
    "bartender jobs",
    "housekeeping jobs",

    // Construction & Skilled Trades
    "electrician jobs",
    "plumber jobs",
    "carpenter jobs",
    "welder jobs",
    "HVAC technician jobs",
    "construction manager jobs",
    "roofing jobs",
    "mason jobs",

    // Transportation & Logistics
    "truck driver jobs",
    "delivery driver jobs",
    "logistics coordinator jobs",
    "warehouse manager jobs",
    "supply chain analyst jobs",
    "freight broker jobs",
    "bus driver jobs",

    // Arts, Media & Design
    "graphic designer jobs",
    "video editor jobs",
    "photographer jobs",
    "interior designer jobs",
    "fashion designer jobs",
    "actor jobs",
    "musician jobs",
    "film director jobs",

    // Retail & Consumer Services
    "cashier jobs",
    "store manager jobs",
    "merchandiser jobs",
    "retail associate jobs",
    "buyer jobs",
    "personal shopper jobs",

    // Manufacturing & Production
    "factory worker jobs",
    "quality control inspector jobs",
    "manufacturing supervisor jobs",
    "assembler jobs",
    "machinist jobs",

    // Government & Public Services
    "police officer jobs",
    "firefighter jobs",
    "postal worker jobs",
    "social worker jobs",
    "city planner jobs",
    "military jobs",

    // Agriculture & Natural Resources
    "farmer jobs",
    "agronomist jobs",
    "fisherman jobs",
    "forester jobs",
    "landscaper jobs",

    // Energy & Utilities
    "solar panel installer jobs",
    "wind turbine technician jobs",
    "oil rig worker jobs",
    "power plant operator jobs",
    "water treatment specialist jobs",
];
