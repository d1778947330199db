//! Hand-authored fallback datasets, one table per generation call site.
//!
//! Each payload is a complete, valid answer in the exact shape the generator
//! is expected to produce — when generation fails, callers receive one of
//! these verbatim. Every table carries an explicit default entry for topics
//! with no specific coverage; the default is its own slot, not an alias of
//! a real topic.

use super::fallback::FallbackTable;
use super::schema::{
    CourseBatch, DemandLevel, GeneratedCourse, IndustryInsights, InterviewSet, MarketOutlook,
    QuizQuestion, SalaryRange,
};

/// The full set of fallback tables, built once at startup and shared
/// read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    pub insights: FallbackTable<IndustryInsights>,
    pub interview: FallbackTable<InterviewSet>,
    pub courses: FallbackTable<CourseBatch>,
}

impl FallbackCatalog {
    pub fn new() -> Self {
        Self {
            insights: insights_table(),
            interview: interview_table(),
            courses: course_table(),
        }
    }
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn salary(role: &str, min: f64, max: f64, median: f64) -> SalaryRange {
    SalaryRange {
        role: role.to_string(),
        min,
        max,
        median,
        location: "US".to_string(),
    }
}

fn question(text: &str, options: [&str; 4], correct: &str, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        question: text.to_string(),
        options: strings(&options),
        correct_answer: correct.to_string(),
        explanation: explanation.to_string(),
    }
}

fn course(title: &str, description: &str, category: &str, level: &str, price: f64) -> GeneratedCourse {
    GeneratedCourse {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        level: level.to_string(),
        price,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Industry insights
// ────────────────────────────────────────────────────────────────────────────

fn insights_table() -> FallbackTable<IndustryInsights> {
    FallbackTable::new(default_insights())
        .with_entry("Technology", technology_insights())
        .with_entry("Finance", finance_insights())
        .with_entry("Marketing", marketing_insights())
}

/// Generic cross-industry profile served for topics with no entry of their own.
fn default_insights() -> IndustryInsights {
    IndustryInsights {
        salary_ranges: vec![
            salary("Analyst", 55000.0, 95000.0, 70000.0),
            salary("Specialist", 50000.0, 90000.0, 65000.0),
            salary("Manager", 75000.0, 140000.0, 100000.0),
            salary("Director", 110000.0, 200000.0, 150000.0),
            salary("Consultant", 65000.0, 130000.0, 90000.0),
        ],
        growth_rate: 8.0,
        demand_level: DemandLevel::Medium,
        top_skills: strings(&[
            "Communication",
            "Data Analysis",
            "Project Management",
            "Problem Solving",
            "Leadership",
        ]),
        market_outlook: MarketOutlook::Neutral,
        key_trends: strings(&[
            "Digital Transformation",
            "Remote Work",
            "Automation",
            "Upskilling",
            "Sustainability",
        ]),
        recommended_skills: strings(&[
            "Data Literacy",
            "Stakeholder Management",
            "Process Improvement",
            "Critical Thinking",
            "Adaptability",
        ]),
    }
}

fn technology_insights() -> IndustryInsights {
    IndustryInsights {
        salary_ranges: vec![
            salary("Software Engineer", 70000.0, 150000.0, 95000.0),
            salary("Data Scientist", 80000.0, 160000.0, 110000.0),
            salary("Product Manager", 90000.0, 180000.0, 125000.0),
            salary("DevOps Engineer", 75000.0, 155000.0, 105000.0),
            salary("Frontend Developer", 65000.0, 140000.0, 90000.0),
        ],
        growth_rate: 22.0,
        demand_level: DemandLevel::High,
        top_skills: strings(&["JavaScript", "Python", "React", "AWS", "Docker"]),
        market_outlook: MarketOutlook::Positive,
        key_trends: strings(&[
            "AI Integration",
            "Cloud Migration",
            "Remote Work",
            "Cybersecurity Focus",
            "Low-Code Platforms",
        ]),
        recommended_skills: strings(&[
            "Machine Learning",
            "Kubernetes",
            "TypeScript",
            "GraphQL",
            "Microservices",
        ]),
    }
}

fn finance_insights() -> IndustryInsights {
    IndustryInsights {
        salary_ranges: vec![
            salary("Financial Analyst", 60000.0, 110000.0, 80000.0),
            salary("Investment Banker", 100000.0, 250000.0, 150000.0),
            salary("Risk Manager", 85000.0, 160000.0, 115000.0),
            salary("Accountant", 50000.0, 95000.0, 68000.0),
            salary("Portfolio Manager", 95000.0, 210000.0, 135000.0),
        ],
        growth_rate: 7.0,
        demand_level: DemandLevel::Medium,
        top_skills: strings(&[
            "Financial Modeling",
            "Excel",
            "SQL",
            "Valuation",
            "Regulatory Compliance",
        ]),
        market_outlook: MarketOutlook::Positive,
        key_trends: strings(&[
            "Fintech Disruption",
            "Algorithmic Trading",
            "ESG Investing",
            "Open Banking",
            "RegTech Adoption",
        ]),
        recommended_skills: strings(&[
            "Python",
            "Data Visualization",
            "Risk Analytics",
            "Blockchain Fundamentals",
            "Machine Learning",
        ]),
    }
}

fn marketing_insights() -> IndustryInsights {
    IndustryInsights {
        salary_ranges: vec![
            salary("Marketing Manager", 65000.0, 130000.0, 90000.0),
            salary("SEO Specialist", 45000.0, 85000.0, 60000.0),
            salary("Content Strategist", 55000.0, 100000.0, 72000.0),
            salary("Growth Marketer", 70000.0, 140000.0, 95000.0),
            salary("Brand Manager", 75000.0, 145000.0, 100000.0),
        ],
        growth_rate: 10.0,
        demand_level: DemandLevel::High,
        top_skills: strings(&[
            "SEO",
            "Content Marketing",
            "Google Analytics",
            "Paid Advertising",
            "Copywriting",
        ]),
        market_outlook: MarketOutlook::Positive,
        key_trends: strings(&[
            "AI-Generated Content",
            "First-Party Data",
            "Short-Form Video",
            "Influencer Marketing",
            "Marketing Automation",
        ]),
        recommended_skills: strings(&[
            "Marketing Analytics",
            "CRM Platforms",
            "A/B Testing",
            "Conversion Optimization",
            "Community Building",
        ]),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview question sets
// ────────────────────────────────────────────────────────────────────────────

fn interview_table() -> FallbackTable<InterviewSet> {
    FallbackTable::new(default_questions())
        .with_entry("Technology", technology_questions())
        .with_entry("Finance", finance_questions())
        .with_entry("Healthcare", healthcare_questions())
        .with_entry("Sales", sales_questions())
        .with_entry("Marketing", marketing_questions())
        .with_entry("Education", education_questions())
}

fn technology_questions() -> InterviewSet {
    InterviewSet {
        questions: vec![
            question(
                "What is the time complexity of binary search?",
                ["O(n)", "O(log n)", "O(n²)", "O(1)"],
                "O(log n)",
                "Binary search divides the search space in half with each iteration.",
            ),
            question(
                "Which design pattern ensures a class has only one instance?",
                ["Factory", "Singleton", "Observer", "Strategy"],
                "Singleton",
                "Singleton pattern restricts instantiation of a class to one object.",
            ),
            question(
                "What does REST stand for?",
                [
                    "Representational State Transfer",
                    "Remote State Transfer",
                    "Relational State Transfer",
                    "Resource State Transfer",
                ],
                "Representational State Transfer",
                "REST is an architectural style for designing networked applications.",
            ),
            question(
                "Which HTTP method is idempotent?",
                ["POST", "PUT", "PATCH", "DELETE"],
                "PUT",
                "PUT requests can be called multiple times with the same result.",
            ),
            question(
                "What is the purpose of a foreign key in a database?",
                [
                    "Primary identification",
                    "Data encryption",
                    "Referential integrity",
                    "Index optimization",
                ],
                "Referential integrity",
                "Foreign keys maintain referential integrity between related tables.",
            ),
            question(
                "Which JavaScript method is used to add an element to the end of an array?",
                ["push()", "pop()", "shift()", "unshift()"],
                "push()",
                "The push() method adds one or more elements to the end of an array.",
            ),
            question(
                "What is the difference between == and === in JavaScript?",
                [
                    "No difference",
                    "=== checks type and value",
                    "== is faster",
                    "=== is deprecated",
                ],
                "=== checks type and value",
                "=== performs strict equality comparison including type checking.",
            ),
            question(
                "Which CSS property is used to create flexible layouts?",
                [
                    "display: block",
                    "display: flex",
                    "display: inline",
                    "display: table",
                ],
                "display: flex",
                "Flexbox provides a flexible way to arrange elements in a container.",
            ),
            question(
                "What is the main purpose of version control systems like Git?",
                [
                    "Code compilation",
                    "Track changes and collaboration",
                    "Database management",
                    "User interface design",
                ],
                "Track changes and collaboration",
                "Version control systems track code changes and enable team collaboration.",
            ),
            question(
                "Which principle suggests that software entities should be open for extension but closed for modification?",
                [
                    "Single Responsibility",
                    "Open/Closed",
                    "Liskov Substitution",
                    "Interface Segregation",
                ],
                "Open/Closed",
                "The Open/Closed Principle is one of the SOLID principles of object-oriented design.",
            ),
        ],
    }
}

fn finance_questions() -> InterviewSet {
    InterviewSet {
        questions: vec![
            question(
                "What is the Capital Asset Pricing Model (CAPM) used for?",
                [
                    "Calculate interest rates",
                    "Determine expected return",
                    "Measure inflation",
                    "Assess credit risk",
                ],
                "Determine expected return",
                "CAPM calculates the expected return of an asset based on its risk.",
            ),
            question(
                "What does NPV stand for?",
                [
                    "Net Present Value",
                    "Net Profit Value",
                    "New Product Value",
                    "Net Portfolio Value",
                ],
                "Net Present Value",
                "NPV is the difference between present value of cash inflows and outflows.",
            ),
            question(
                "What is the primary purpose of diversification in investment?",
                [
                    "Maximize returns",
                    "Reduce risk",
                    "Increase liquidity",
                    "Minimize taxes",
                ],
                "Reduce risk",
                "Diversification spreads risk across different investments to reduce overall portfolio risk.",
            ),
            question(
                "What does ROI stand for?",
                [
                    "Return on Investment",
                    "Rate of Interest",
                    "Risk of Investment",
                    "Ratio of Income",
                ],
                "Return on Investment",
                "ROI measures the efficiency of an investment by comparing gain to cost.",
            ),
            question(
                "Which financial statement shows a company's financial position at a specific point in time?",
                [
                    "Income Statement",
                    "Balance Sheet",
                    "Cash Flow Statement",
                    "Statement of Equity",
                ],
                "Balance Sheet",
                "The balance sheet provides a snapshot of assets, liabilities, and equity at a specific date.",
            ),
            question(
                "What is the difference between stocks and bonds?",
                [
                    "No difference",
                    "Stocks are ownership, bonds are debt",
                    "Bonds are riskier",
                    "Stocks pay fixed interest",
                ],
                "Stocks are ownership, bonds are debt",
                "Stocks represent ownership in a company, while bonds are debt instruments.",
            ),
            question(
                "What does P/E ratio measure?",
                [
                    "Profit margin",
                    "Price to Earnings",
                    "Portfolio Efficiency",
                    "Payment Equity",
                ],
                "Price to Earnings",
                "P/E ratio compares a company's stock price to its earnings per share.",
            ),
            question(
                "What is compound interest?",
                [
                    "Simple interest calculation",
                    "Interest on principal and accumulated interest",
                    "Government bond interest",
                    "Corporate dividend",
                ],
                "Interest on principal and accumulated interest",
                "Compound interest is earned on both the principal and previously earned interest.",
            ),
            question(
                "What is a bull market?",
                [
                    "Declining market",
                    "Rising market",
                    "Volatile market",
                    "Stable market",
                ],
                "Rising market",
                "A bull market is characterized by rising stock prices and investor optimism.",
            ),
            question(
                "What does liquidity refer to in finance?",
                [
                    "Profitability",
                    "Ease of converting to cash",
                    "Risk level",
                    "Interest rate",
                ],
                "Ease of converting to cash",
                "Liquidity measures how quickly an asset can be converted to cash without affecting its price.",
            ),
        ],
    }
}

fn healthcare_questions() -> InterviewSet {
    InterviewSet {
        questions: vec![
            question(
                "What is HIPAA primarily concerned with?",
                [
                    "Medical research",
                    "Patient privacy",
                    "Drug approval",
                    "Hospital management",
                ],
                "Patient privacy",
                "HIPAA protects the privacy and security of health information.",
            ),
            question(
                "What does EHR stand for?",
                [
                    "Emergency Health Record",
                    "Electronic Health Record",
                    "Extended Health Report",
                    "External Health Registry",
                ],
                "Electronic Health Record",
                "EHR is a digital version of a patient's paper chart.",
            ),
            question(
                "What is the primary goal of evidence-based medicine?",
                [
                    "Reduce costs",
                    "Use best available evidence for decisions",
                    "Increase efficiency",
                    "Standardize procedures",
                ],
                "Use best available evidence for decisions",
                "Evidence-based medicine integrates clinical expertise with the best research evidence.",
            ),
            question(
                "What does ICD stand for in healthcare?",
                [
                    "Internal Care Department",
                    "International Classification of Diseases",
                    "Intensive Care Division",
                    "Integrated Clinical Data",
                ],
                "International Classification of Diseases",
                "ICD is a medical classification system used for coding diagnoses and procedures.",
            ),
            question(
                "What is the purpose of clinical trials?",
                [
                    "Train doctors",
                    "Test new treatments",
                    "Reduce healthcare costs",
                    "Manage patient records",
                ],
                "Test new treatments",
                "Clinical trials test the safety and effectiveness of new medical treatments.",
            ),
            question(
                "What does PHI stand for in healthcare?",
                [
                    "Public Health Information",
                    "Protected Health Information",
                    "Personal Health Insurance",
                    "Primary Health Indicator",
                ],
                "Protected Health Information",
                "PHI refers to individually identifiable health information protected under HIPAA.",
            ),
            question(
                "What is telemedicine?",
                [
                    "Emergency medicine",
                    "Remote healthcare delivery",
                    "Surgical procedures",
                    "Medical equipment",
                ],
                "Remote healthcare delivery",
                "Telemedicine uses technology to provide healthcare services remotely.",
            ),
            question(
                "What is the primary purpose of medical coding?",
                [
                    "Patient scheduling",
                    "Billing and documentation",
                    "Drug dispensing",
                    "Equipment maintenance",
                ],
                "Billing and documentation",
                "Medical coding translates medical diagnoses and procedures into standardized codes.",
            ),
            question(
                "What does CPR stand for?",
                [
                    "Clinical Patient Review",
                    "Cardiopulmonary Resuscitation",
                    "Comprehensive Patient Record",
                    "Critical Patient Response",
                ],
                "Cardiopulmonary Resuscitation",
                "CPR is an emergency procedure to restore blood circulation and breathing.",
            ),
            question(
                "What is the main purpose of quality assurance in healthcare?",
                [
                    "Reduce costs",
                    "Ensure patient safety and care quality",
                    "Increase efficiency",
                    "Manage staff",
                ],
                "Ensure patient safety and care quality",
                "Quality assurance focuses on maintaining and improving patient care standards.",
            ),
        ],
    }
}

fn sales_questions() -> InterviewSet {
    InterviewSet {
        questions: vec![
            question(
                "What does CRM stand for in sales?",
                [
                    "Customer Relationship Management",
                    "Customer Revenue Model",
                    "Client Resource Management",
                    "Customer Retention Method",
                ],
                "Customer Relationship Management",
                "CRM systems help manage customer interactions and relationships throughout the sales process.",
            ),
            question(
                "What is the primary goal of lead qualification?",
                [
                    "Generate more leads",
                    "Determine if a prospect is likely to buy",
                    "Close deals faster",
                    "Reduce marketing costs",
                ],
                "Determine if a prospect is likely to buy",
                "Lead qualification helps sales teams focus on prospects most likely to convert.",
            ),
            question(
                "What does BANT stand for in sales qualification?",
                [
                    "Budget, Authority, Need, Timeline",
                    "Business, Analysis, Negotiation, Terms",
                    "Buyer, Account, Network, Target",
                    "Brand, Audience, Niche, Territory",
                ],
                "Budget, Authority, Need, Timeline",
                "BANT is a framework for qualifying sales prospects based on four key criteria.",
            ),
            question(
                "What is the difference between a lead and a prospect?",
                [
                    "No difference",
                    "Leads are qualified, prospects are not",
                    "Prospects are qualified, leads are not",
                    "Leads are customers, prospects are not",
                ],
                "Prospects are qualified, leads are not",
                "A prospect is a qualified lead that has been determined to have potential for purchase.",
            ),
            question(
                "What is consultative selling?",
                [
                    "Selling consulting services",
                    "Acting as an advisor to solve customer problems",
                    "Selling to consultants",
                    "Using consultants to sell",
                ],
                "Acting as an advisor to solve customer problems",
                "Consultative selling focuses on understanding customer needs and providing solutions.",
            ),
            question(
                "What does closing ratio measure?",
                [
                    "Number of calls made",
                    "Percentage of prospects that become customers",
                    "Revenue per sale",
                    "Time to close deals",
                ],
                "Percentage of prospects that become customers",
                "Closing ratio indicates the effectiveness of converting prospects into customers.",
            ),
            question(
                "What is the sales funnel?",
                [
                    "A sales tool",
                    "The process prospects go through to become customers",
                    "A reporting method",
                    "A territory management system",
                ],
                "The process prospects go through to become customers",
                "The sales funnel represents the journey from initial contact to closed deal.",
            ),
            question(
                "What is objection handling?",
                [
                    "Avoiding customer concerns",
                    "Addressing customer concerns to move the sale forward",
                    "Rejecting difficult customers",
                    "Transferring calls to managers",
                ],
                "Addressing customer concerns to move the sale forward",
                "Objection handling involves addressing customer concerns to continue the sales process.",
            ),
            question(
                "What does upselling mean?",
                [
                    "Selling to new customers",
                    "Selling additional or upgraded products to existing customers",
                    "Increasing prices",
                    "Selling online",
                ],
                "Selling additional or upgraded products to existing customers",
                "Upselling involves encouraging customers to purchase more expensive or additional items.",
            ),
            question(
                "What is the purpose of a sales pipeline?",
                [
                    "Store customer data",
                    "Track deals through the sales process",
                    "Generate reports",
                    "Schedule meetings",
                ],
                "Track deals through the sales process",
                "A sales pipeline helps visualize and manage deals at different stages of the sales process.",
            ),
        ],
    }
}

fn marketing_questions() -> InterviewSet {
    InterviewSet {
        questions: vec![
            question(
                "What does CTR stand for in digital marketing?",
                [
                    "Cost To Revenue",
                    "Click Through Rate",
                    "Customer Target Reach",
                    "Content Traffic Ratio",
                ],
                "Click Through Rate",
                "CTR measures the percentage of people who click on a specific link.",
            ),
            question(
                "What is A/B testing used for?",
                [
                    "Budget allocation",
                    "Comparing two versions",
                    "Audience segmentation",
                    "Content creation",
                ],
                "Comparing two versions",
                "A/B testing compares two versions to see which performs better.",
            ),
            question(
                "What does SEO stand for?",
                [
                    "Social Engagement Optimization",
                    "Search Engine Optimization",
                    "Sales Efficiency Operations",
                    "Strategic Email Outreach",
                ],
                "Search Engine Optimization",
                "SEO is the practice of optimizing content to rank higher in search engine results.",
            ),
            question(
                "What is the marketing funnel?",
                [
                    "A sales tool",
                    "Customer journey from awareness to purchase",
                    "Budget allocation method",
                    "Content creation process",
                ],
                "Customer journey from awareness to purchase",
                "The marketing funnel represents the customer's path from initial awareness to final purchase.",
            ),
            question(
                "What does CPC stand for in advertising?",
                [
                    "Cost Per Click",
                    "Customer Per Campaign",
                    "Content Per Channel",
                    "Conversion Per Customer",
                ],
                "Cost Per Click",
                "CPC is the amount paid for each click in pay-per-click advertising.",
            ),
            question(
                "What is brand positioning?",
                [
                    "Logo placement",
                    "How a brand is perceived relative to competitors",
                    "Marketing budget allocation",
                    "Social media strategy",
                ],
                "How a brand is perceived relative to competitors",
                "Brand positioning defines how a brand differentiates itself in the market.",
            ),
            question(
                "What does ROI measure in marketing?",
                [
                    "Reach of Investment",
                    "Return on Investment",
                    "Rate of Interaction",
                    "Revenue of Initiative",
                ],
                "Return on Investment",
                "ROI measures the profitability of marketing investments.",
            ),
            question(
                "What is content marketing?",
                [
                    "Paid advertising",
                    "Creating valuable content to attract customers",
                    "Social media posting",
                    "Email campaigns",
                ],
                "Creating valuable content to attract customers",
                "Content marketing focuses on creating and distributing valuable content to attract and retain customers.",
            ),
            question(
                "What does CRM stand for?",
                [
                    "Customer Relationship Management",
                    "Content Resource Management",
                    "Campaign Revenue Metrics",
                    "Creative Resource Materials",
                ],
                "Customer Relationship Management",
                "CRM systems help manage interactions and relationships with customers.",
            ),
            question(
                "What is the purpose of market segmentation?",
                [
                    "Increase prices",
                    "Divide market into distinct groups",
                    "Reduce competition",
                    "Expand globally",
                ],
                "Divide market into distinct groups",
                "Market segmentation helps target specific customer groups with tailored strategies.",
            ),
        ],
    }
}

fn education_questions() -> InterviewSet {
    InterviewSet {
        questions: vec![
            question(
                "What does LMS stand for?",
                [
                    "Learning Management System",
                    "Lesson Management Software",
                    "Library Management System",
                    "Learning Module Structure",
                ],
                "Learning Management System",
                "LMS is a software application for delivering educational courses.",
            ),
            question(
                "What is scaffolding in education?",
                [
                    "Building structures",
                    "Temporary support for learning",
                    "Assessment method",
                    "Curriculum design",
                ],
                "Temporary support for learning",
                "Scaffolding provides temporary support to help students achieve learning goals.",
            ),
            question(
                "What is differentiated instruction?",
                [
                    "Teaching one way",
                    "Adapting teaching to meet diverse needs",
                    "Using technology",
                    "Group learning only",
                ],
                "Adapting teaching to meet diverse needs",
                "Differentiated instruction tailors teaching methods to accommodate different learning styles and abilities.",
            ),
            question(
                "What does IEP stand for in education?",
                [
                    "Individual Education Plan",
                    "Integrated Educational Program",
                    "Interactive Electronic Platform",
                    "Instructional Enhancement Process",
                ],
                "Individual Education Plan",
                "An IEP is a customized learning plan for students with disabilities.",
            ),
            question(
                "What is formative assessment?",
                [
                    "Final exam",
                    "Ongoing evaluation during learning",
                    "Standardized test",
                    "Grade calculation",
                ],
                "Ongoing evaluation during learning",
                "Formative assessment provides feedback during the learning process to improve instruction.",
            ),
            question(
                "What is the flipped classroom model?",
                [
                    "Traditional lecture format",
                    "Students learn content at home, practice in class",
                    "Online-only learning",
                    "Group projects only",
                ],
                "Students learn content at home, practice in class",
                "Flipped classroom reverses traditional teaching by having students learn content outside class.",
            ),
            question(
                "What does STEM education focus on?",
                [
                    "Science, Technology, Engineering, Mathematics",
                    "Social studies only",
                    "Language arts",
                    "Physical education",
                ],
                "Science, Technology, Engineering, Mathematics",
                "STEM education integrates science, technology, engineering, and mathematics disciplines.",
            ),
            question(
                "What is Bloom's taxonomy used for?",
                [
                    "Plant classification",
                    "Classifying learning objectives",
                    "Student grading",
                    "Classroom management",
                ],
                "Classifying learning objectives",
                "Bloom's taxonomy categorizes learning objectives from basic recall to higher-order thinking.",
            ),
            question(
                "What is project-based learning?",
                [
                    "Memorizing facts",
                    "Learning through real-world projects",
                    "Taking tests",
                    "Reading textbooks",
                ],
                "Learning through real-world projects",
                "Project-based learning engages students in solving real-world problems through extended projects.",
            ),
            question(
                "What does RTI stand for in education?",
                [
                    "Response to Intervention",
                    "Reading and Technology Integration",
                    "Real-Time Instruction",
                    "Resource and Training Initiative",
                ],
                "Response to Intervention",
                "RTI is a framework for providing targeted support to struggling students.",
            ),
        ],
    }
}

/// Industry-neutral professional questions served when no specific set exists.
fn default_questions() -> InterviewSet {
    InterviewSet {
        questions: vec![
            question(
                "What is the most effective first step when given an ambiguous assignment?",
                [
                    "Start immediately",
                    "Clarify goals and constraints with the stakeholder",
                    "Delegate it",
                    "Wait for more instructions",
                ],
                "Clarify goals and constraints with the stakeholder",
                "Clarifying expectations up front prevents wasted effort on the wrong problem.",
            ),
            question(
                "What does SMART stand for in goal setting?",
                [
                    "Specific, Measurable, Achievable, Relevant, Time-bound",
                    "Simple, Manageable, Accurate, Realistic, Tested",
                    "Strategic, Metric, Agile, Reliable, Tracked",
                    "Scoped, Modeled, Approved, Reviewed, Timed",
                ],
                "Specific, Measurable, Achievable, Relevant, Time-bound",
                "SMART criteria make goals concrete and verifiable.",
            ),
            question(
                "Which practice best supports effective teamwork?",
                [
                    "Working in isolation",
                    "Clear, regular communication",
                    "Avoiding disagreement",
                    "Competing with teammates",
                ],
                "Clear, regular communication",
                "Teams align and surface problems early through regular communication.",
            ),
            question(
                "What is the primary purpose of a retrospective or post-mortem?",
                [
                    "Assign blame",
                    "Identify improvements for next time",
                    "Close out budgets",
                    "Celebrate only",
                ],
                "Identify improvements for next time",
                "Retrospectives turn experience into process improvements.",
            ),
            question(
                "When priorities conflict, what should you do first?",
                [
                    "Work longer hours",
                    "Confirm relative priority with your manager or stakeholders",
                    "Pick the easiest task",
                    "Ignore the newer request",
                ],
                "Confirm relative priority with your manager or stakeholders",
                "Stakeholders own priority calls; surfacing the conflict keeps everyone aligned.",
            ),
            question(
                "What is active listening?",
                [
                    "Waiting for your turn to speak",
                    "Fully concentrating on and confirming understanding of the speaker",
                    "Taking verbatim notes",
                    "Agreeing with everything said",
                ],
                "Fully concentrating on and confirming understanding of the speaker",
                "Active listening includes reflecting back what was heard to confirm understanding.",
            ),
            question(
                "What is the best response to receiving critical feedback?",
                [
                    "Defend your decisions immediately",
                    "Understand the specifics and identify what to change",
                    "Dismiss it",
                    "Escalate to management",
                ],
                "Understand the specifics and identify what to change",
                "Feedback is most useful when treated as information about what to improve.",
            ),
            question(
                "What does it mean to manage up?",
                [
                    "Give orders to your manager",
                    "Keep your manager informed and aligned on your work",
                    "Skip levels in the hierarchy",
                    "Take your manager's tasks",
                ],
                "Keep your manager informed and aligned on your work",
                "Managing up is proactively communicating progress, risks, and needs.",
            ),
            question(
                "Which is a sign of a well-run meeting?",
                [
                    "It runs long",
                    "It ends with clear owners and next steps",
                    "Everyone speaks equally long",
                    "No disagreements occur",
                ],
                "It ends with clear owners and next steps",
                "Meetings create value when decisions and follow-ups are explicit.",
            ),
            question(
                "What is the main benefit of documenting decisions?",
                [
                    "Satisfying compliance",
                    "Preserving context so future work doesn't relitigate them",
                    "Creating more files",
                    "Impressing leadership",
                ],
                "Preserving context so future work doesn't relitigate them",
                "Decision records keep teams from repeatedly revisiting settled questions.",
            ),
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Course batches
// ────────────────────────────────────────────────────────────────────────────

fn course_table() -> FallbackTable<CourseBatch> {
    FallbackTable::new(default_courses())
        .with_entry("Technology", CourseBatch {
            courses: vec![
                course(
                    "React.js Fundamentals",
                    "Learn the basics of React.js and build modern web applications with hooks, components, and state management.",
                    "Technology",
                    "Beginner",
                    0.0,
                ),
                course(
                    "Advanced JavaScript",
                    "Master advanced JavaScript concepts including closures, prototypes, async/await, and ES6+ features.",
                    "Technology",
                    "Advanced",
                    49.0,
                ),
                course(
                    "Cloud Infrastructure Essentials",
                    "Deploy and operate applications on cloud platforms with containers, CI/CD pipelines, and monitoring.",
                    "Technology",
                    "Intermediate",
                    39.0,
                ),
            ],
        })
        .with_entry("Marketing", CourseBatch {
            courses: vec![
                course(
                    "Digital Marketing Strategy",
                    "Learn effective digital marketing strategies for modern businesses including SEO, social media, and analytics.",
                    "Marketing",
                    "Intermediate",
                    29.0,
                ),
                course(
                    "Content Marketing Foundations",
                    "Plan, produce, and measure content that attracts and retains an audience across channels.",
                    "Marketing",
                    "Beginner",
                    0.0,
                ),
            ],
        })
        .with_entry("Design", CourseBatch {
            courses: vec![
                course(
                    "UI/UX Design Principles",
                    "Master the fundamentals of user interface and user experience design with practical projects.",
                    "Design",
                    "Beginner",
                    39.0,
                ),
            ],
        })
        .with_entry("Data Science", CourseBatch {
            courses: vec![
                course(
                    "Data Science with Python",
                    "Complete guide to data science using Python, pandas, numpy, and machine learning libraries.",
                    "Data Science",
                    "Intermediate",
                    0.0,
                ),
            ],
        })
}

/// Mixed starter batch served for categories with no dedicated entry.
fn default_courses() -> CourseBatch {
    CourseBatch {
        courses: vec![
            course(
                "React.js Fundamentals",
                "Learn the basics of React.js and build modern web applications with hooks, components, and state management.",
                "Technology",
                "Beginner",
                0.0,
            ),
            course(
                "Advanced JavaScript",
                "Master advanced JavaScript concepts including closures, prototypes, async/await, and ES6+ features.",
                "Technology",
                "Advanced",
                49.0,
            ),
            course(
                "Digital Marketing Strategy",
                "Learn effective digital marketing strategies for modern businesses including SEO, social media, and analytics.",
                "Marketing",
                "Intermediate",
                29.0,
            ),
            course(
                "UI/UX Design Principles",
                "Master the fundamentals of user interface and user experience design with practical projects.",
                "Design",
                "Beginner",
                39.0,
            ),
            course(
                "Data Science with Python",
                "Complete guide to data science using Python, pandas, numpy, and machine learning libraries.",
                "Data Science",
                "Intermediate",
                0.0,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::fallback::Topic;
    use crate::ai::schema::Validate;

    /// Every hand-authored payload must pass the same schema validation the
    /// generator's output is held to.
    #[test]
    fn test_all_fallback_payloads_validate() {
        let catalog = FallbackCatalog::new();
        for payload in catalog.insights.payloads() {
            payload.validate().expect("insights payload must validate");
        }
        for payload in catalog.interview.payloads() {
            payload.validate().expect("interview payload must validate");
        }
        for payload in catalog.courses.payloads() {
            payload.validate().expect("course payload must validate");
        }
    }

    #[test]
    fn test_finance_insights_has_at_least_five_salary_ranges() {
        let catalog = FallbackCatalog::new();
        let finance = Topic::parse("Finance").unwrap();
        let entry = catalog
            .insights
            .entry(&finance)
            .expect("Finance must have a dedicated insights entry");
        assert!(entry.salary_ranges.len() >= 5);
    }

    #[test]
    fn test_each_interview_set_has_ten_questions_with_four_options() {
        let catalog = FallbackCatalog::new();
        for set in catalog.interview.payloads() {
            assert_eq!(set.questions.len(), 10);
            for q in &set.questions {
                assert_eq!(q.options.len(), 4);
                assert!(
                    q.options.contains(&q.correct_answer),
                    "correct answer must be one of the options: {}",
                    q.question
                );
            }
        }
    }

    #[test]
    fn test_default_entries_are_distinct_from_topic_entries() {
        let catalog = FallbackCatalog::new();
        let technology = Topic::parse("Technology").unwrap();
        // The default profile is its own dataset, not an alias of Technology.
        assert_ne!(
            catalog.insights.default_payload(),
            catalog.insights.entry(&technology).unwrap()
        );
        assert_ne!(
            catalog.interview.default_payload(),
            catalog.interview.entry(&technology).unwrap()
        );
    }

    #[test]
    fn test_unknown_category_gets_mixed_starter_batch() {
        let catalog = FallbackCatalog::new();
        let topic = Topic::parse("Astronomy").unwrap();
        let batch = catalog.courses.lookup(&topic);
        assert_eq!(batch.courses.len(), 5);
    }
}
