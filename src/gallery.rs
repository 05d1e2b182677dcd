//! The Hall of Cringe: canned example posts.

/// A showcase post with the score it is advertised with.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub title: &'static str,
    pub advertised_score: i32,
    pub post: &'static str,
}

pub static HALL_OF_CRINGE: &[Example] = &[
    Example {
        title: "The Humble Brag Master",
        advertised_score: 95,
        post: "I usually don't post but I'm humbled to announce that I just closed the biggest deal of my career! 🚀✨\n\nStarted from the bottom, now we're here. My team isn't just employees, they're family.\n\nIt's all about mindset. Let that sink in.\n\nAgree? Thoughts?\n\n#Blessed #Journey #GameChanger",
    },
    Example {
        title: "The Vulnerable Flex",
        advertised_score: 88,
        post: "I'm crying as I write this... 😭\n\nThree years ago I was broke, sleeping on my friend's couch. Today I just bought my dream car. \n\nThe lesson? Mindset is everything. \n\nI wake up at 5am every day because success doesn't sleep. If you're not growing, you're dying.\n\nReach out if you want to connect! 💪\n\n#Grateful #NeverGiveUp",
    },
    Example {
        title: "The Dropout Hero",
        advertised_score: 92,
        post: "I dropped out of college and everyone said I'd never succeed.\n\nWell...\n\nToday I'm the CEO of a 7-figure company. 🔥\n\nSometimes you have to take the road less traveled. Sometimes you have to believe in yourself when nobody else will.\n\nEvery failure taught me something. Every rejection made me stronger.\n\nDon't let anyone tell you what you can't do.\n\nAgree? Thoughts? Let that sink in.\n\n#Blessed #Journey #Mindset",
    },
];

/// Find an example by title, ignoring case.
pub fn find(title: &str) -> Option<&'static Example> {
    HALL_OF_CRINGE
        .iter()
        .find(|e| e.title.eq_ignore_ascii_case(title))
}
