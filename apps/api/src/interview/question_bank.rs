//! Question Bank — canned questions keyed by technology tag.
//!
//! The deterministic fallback source for question generation. `general` is
//! role-agnostic and always part of the pool.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

/// Tag whose questions are always included.
pub const GENERAL_TAG: &str = "general";

/// Number of questions drawn from the pool.
pub const SAMPLE_SIZE: usize = 5;

pub type BankTable = &'static [(&'static str, &'static [&'static str])];

static BUILTIN: BankTable = &[
    (
        "python",
        &[
            "Can you explain the difference between lists and tuples in Python? When would you use each?",
            "How do you handle exceptions in Python? Can you walk me through a try-except block?",
            "What are Python decorators? How would you write a custom one?",
            "How would you write a list comprehension that keeps only the even numbers from a list?",
            "How does Python's garbage collection work, and what memory management practices do you follow?",
        ],
    ),
    (
        "mysql",
        &[
            "What is the difference between INNER JOIN and LEFT JOIN in MySQL? When would you use each?",
            "How do indexes improve query performance in MySQL, and what do they cost?",
            "What is database normalization, and why do the normal forms matter?",
            "What are stored procedures in MySQL? When would you prefer them over plain queries?",
            "How do you track down and optimize a slow MySQL query? Which tools do you use?",
        ],
    ),
    (
        "nlp",
        &[
            "What is the difference between stemming and lemmatization?",
            "What are word embeddings, and how do Word2Vec and GloVe differ?",
            "How is TF-IDF calculated, and when would you use it?",
            "What are n-grams? How do you choose the right n for a task?",
            "Which approaches would you use for sentiment analysis on different kinds of text?",
        ],
    ),
    (
        "javascript",
        &[
            "What is the difference between var, let, and const in JavaScript?",
            "What are closures in JavaScript? Can you give a practical example?",
            "How does the JavaScript event loop work together with the call stack?",
            "How do promises and async/await differ from traditional callbacks?",
            "What is the difference between == and === in JavaScript, and why does it matter?",
        ],
    ),
    (
        "react",
        &[
            "Can you describe the React component lifecycle and its key phases?",
            "How do useState and useEffect differ? Can you give an example of each?",
            "How do you manage state in a larger React application?",
            "What is the difference between props and state in React?",
            "What is the Virtual DOM, and how does React's reconciliation work?",
        ],
    ),
    (
        "aws",
        &[
            "What is the difference between EC2 and Lambda? When would you use each?",
            "How would you design a scalable web application on AWS? Which services would you use?",
            "How do S3, EBS, and EFS compare as storage options?",
            "How do you configure auto-scaling in AWS for different traffic patterns?",
            "How do you secure an application running on AWS?",
        ],
    ),
    (
        "java",
        &[
            "Can you explain the main object-oriented programming concepts in Java?",
            "What is the difference between abstract classes and interfaces in Java?",
            "How does garbage collection work in Java, and which collectors have you used?",
            "How do you handle thread safety in multithreaded Java applications?",
            "When is the Singleton pattern appropriate in Java, and what are its pitfalls?",
        ],
    ),
    (
        "sql",
        &[
            "What is the difference between INNER JOIN and LEFT JOIN? When would you use each?",
            "What are database indexes, and how do they speed up queries?",
            "Can you explain database normalization and the different normal forms?",
            "What are stored procedures? When would you use them over regular queries?",
            "What is your systematic approach to optimizing a slow SQL query?",
        ],
    ),
    (
        GENERAL_TAG,
        &[
            "Can you walk me through a challenging project you've worked on? What made it difficult?",
            "How do you approach debugging a complex issue? What is your process?",
            "How do you use version control to collaborate on code within a team?",
            "What is your approach to testing? How do you ensure quality in your projects?",
            "How do you stay up to date with developments in your field?",
        ],
    ),
];

/// A read-only table of canned questions.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    table: BankTable,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuestionBank {
    pub fn builtin() -> Self {
        Self { table: BUILTIN }
    }

    #[cfg(test)]
    pub fn new(table: BankTable) -> Self {
        Self { table }
    }

    /// Tags that occur (case-insensitively) as a substring of the tech stack text,
    /// with `general` first. Matching is literal, so "javascript" also matches "java".
    pub fn matching_tags(&self, tech_stack: &str) -> Vec<&'static str> {
        let stack = tech_stack.to_lowercase();
        let mut tags = vec![GENERAL_TAG];
        tags.extend(
            self.table
                .iter()
                .map(|(tag, _)| *tag)
                .filter(|tag| *tag != GENERAL_TAG && stack.contains(tag)),
        );
        tags
    }

    /// All questions of the matching tags, deduplicated in first-seen order.
    pub fn pool(&self, tech_stack: &str) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut pool = Vec::new();

        for tag in self.matching_tags(tech_stack) {
            let questions = self
                .table
                .iter()
                .filter(|(t, _)| *t == tag)
                .flat_map(|(_, questions)| questions.iter().copied());
            for question in questions {
                if seen.insert(question) {
                    pool.push(question);
                }
            }
        }

        pool
    }

    /// Draws `SAMPLE_SIZE` distinct questions uniformly at random from the pool.
    /// A pool smaller than that is returned whole.
    pub fn lookup<R: Rng + ?Sized>(&self, tech_stack: &str, rng: &mut R) -> Vec<String> {
        let pool = self.pool(tech_stack);
        if pool.len() < SAMPLE_SIZE {
            return pool.into_iter().map(str::to_string).collect();
        }
        pool.choose_multiple(rng, SAMPLE_SIZE)
            .map(|q| q.to_string())
            .collect()
    }
}
