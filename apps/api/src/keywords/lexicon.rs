//! Word lists backing `RuleBasedAnalyzer`. All entries are lowercase.

pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "also", "among", "an",
    "and", "any", "are", "around", "as", "at", "because", "before", "below", "between", "both",
    "but", "by", "can", "could", "down", "during", "each", "e.g", "etc", "every", "few", "for",
    "from", "further", "he", "her", "here", "hers", "him", "his", "how", "i", "i.e", "if", "in",
    "into", "it", "its", "me", "might", "mine", "more", "most", "must", "my", "myself", "no",
    "nor", "not", "of", "off", "on", "once", "only", "onto", "or", "other", "our", "ours",
    "ourselves", "out", "over", "per", "same", "shall", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "upon", "us", "very",
    "via", "we", "what", "when", "where", "which", "while", "who", "whom", "whose", "why", "will",
    "with", "within", "without", "would", "yes", "yet", "you", "your", "yours", "yourself",
];

/// Finite verb forms that never head a noun phrase. Participles ending in
/// `-ing`/`-ed` are handled by suffix instead.
pub const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "do", "does",
    "did", "done", "get", "gets", "got", "go", "goes", "went", "gone", "make", "makes", "made",
    "take", "takes", "took", "taken", "work", "works", "lead", "leads", "led", "build", "builds",
    "built", "run", "runs", "ran", "manage", "manages", "develop", "develops", "create", "creates",
    "use", "uses", "join", "joins", "help", "helps", "drive", "drives", "drove", "own", "owns",
    "deliver", "delivers", "improve", "improves", "reduce", "reduces", "increase", "increases",
    "implement", "implements", "collaborate", "collaborates", "ensure", "ensures", "maintain",
    "maintains", "write", "writes", "wrote", "written", "see", "saw", "seen", "know", "knew",
    "known", "seek", "seeks", "want", "wants", "include", "includes", "provide", "provides",
    "analyze", "analyzes", "analyse", "analyses", "lives", "live", "became", "become",
];

pub const ADVERB_SUFFIXES: &[&str] = &["ally", "ively", "ously", "fully", "lessly"];

pub const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof", "sir", "madam"];

/// Joins two capitalised words into one proper-noun span ("Bank of America").
pub const CONNECTORS: &[&str] = &["of"];

/// A span ending in one of these is an organization.
pub const ORG_SUFFIXES: &[&str] = &[
    "ag", "agency", "analytics", "associates", "bank", "co", "company", "consulting", "corp",
    "corporation", "enterprises", "foundation", "gmbh", "group", "holdings", "inc",
    "incorporated", "industries", "labs", "laboratories", "limited", "llc", "llp", "ltd",
    "networks", "partners", "plc", "pvt", "services", "software", "solutions", "systems",
    "technologies", "technology", "ventures",
];

/// A span containing one of these anywhere is an organization.
pub const ORG_KEYWORDS: &[&str] = &[
    "academy", "bank", "college", "hospital", "institute", "ministry", "school", "university",
];

pub const KNOWN_ORGANIZATIONS: &[&str] = &[
    "accenture", "adobe", "amazon", "apple", "capgemini", "cisco", "cognizant", "deloitte",
    "facebook", "flipkart", "google", "hcl", "ibm", "infosys", "intel", "meta", "microsoft",
    "netflix", "nvidia", "oracle", "paytm", "reliance", "salesforce", "samsung", "sap", "swiggy",
    "tcs", "uber", "wipro", "zomato",
];

pub const PLACES: &[&str] = &[
    // countries and regions
    "australia", "bangladesh", "brazil", "canada", "china", "europe", "france", "germany",
    "india", "indonesia", "ireland", "italy", "japan", "kenya", "malaysia", "mexico", "nepal",
    "netherlands", "new zealand", "nigeria", "pakistan", "philippines", "poland", "portugal",
    "qatar", "russia", "saudi arabia", "singapore", "south africa", "spain", "sri lanka",
    "sweden", "switzerland", "thailand", "uae", "united arab emirates", "united kingdom",
    "united states", "usa", "uk", "vietnam",
    // indian states and cities
    "ahmedabad", "andhra pradesh", "bangalore", "bengaluru", "bhopal", "bhubaneswar",
    "bombay", "calcutta", "chandigarh", "chennai", "coimbatore", "delhi", "goa", "gujarat",
    "gurgaon", "gurugram", "hyderabad", "indore", "jaipur", "karnataka", "kerala", "kochi",
    "kolkata", "lucknow", "madhya pradesh", "madras", "maharashtra", "mumbai", "mysore",
    "nagpur", "new delhi", "noida", "pune", "punjab", "rajasthan", "surat", "tamil nadu",
    "telangana", "thane", "thiruvananthapuram", "uttar pradesh", "vadodara", "visakhapatnam",
    "west bengal",
    // world cities
    "amsterdam", "austin", "barcelona", "beijing", "berlin", "boston", "chicago", "dubai",
    "dublin", "hong kong", "london", "los angeles", "madrid", "melbourne", "munich",
    "new york", "paris", "san francisco", "seattle", "seoul", "shanghai", "sydney", "tokyo",
    "toronto", "vancouver", "zurich",
];

pub const GIVEN_NAMES: &[&str] = &[
    "aarav", "aditi", "aditya", "akash", "alice", "amit", "ananya", "anil", "anjali", "arjun",
    "ashok", "bob", "carlos", "charles", "chris", "daniel", "david", "deepak", "deepika",
    "divya", "elizabeth", "emily", "emma", "gaurav", "george", "harsh", "isha", "james", "jane",
    "jennifer", "jessica", "john", "jose", "karan", "karthik", "kavya", "kiran", "laura",
    "linda", "lisa", "manish", "maria", "mark", "mary", "meera", "michael", "mohammed",
    "mohan", "neha", "nikhil", "nisha", "pooja", "prakash", "pranav", "priya", "rahul", "raj",
    "rajesh", "ravi", "riya", "robert", "rohan", "rohit", "sachin", "sai", "sanjay", "sarah",
    "shreya", "sneha", "sunil", "suresh", "tanvi", "thomas", "vijay", "vikram",
    "william", "yash",
];
