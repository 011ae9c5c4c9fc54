// Rotating subtitle under the site name. One is shown per page load.
pub const TAGLINES: &[&str] = &[
    "Writes code, mostly on purpose.",
    "Now with 20% more mountains.",
    "Professional overthinker.",
    "Turning coffee into commit messages.",
    "Probably refactoring something.",
    "It compiled on my machine.",
    "Lost in the clouds, found in the logs.",
    "Off by one, but consistent about it.",
    "Works best at 60 frames per second.",
    "Hand-crafted, artisanal bugs.",
    "Reading the manual so you don't have to.",
    "Still looking for the any key.",
    "Powered by curiosity and leftovers.",
    "Ships small, ships often.",
    "Occasionally correct.",
    "Tabs and spaces, living in harmony.",
    "A work in progress since birth.",
    "Debugging reality one frame at a time.",
    "Slightly parallax.",
    "Building things that mostly stand up.",
    "Will trade pull requests for snacks.",
    "Here for the edge cases.",
    "Closer than the mountains appear.",
    "Certified rubber duck whisperer.",
    "Undefined behaviour enthusiast.",
    "Making computers do the boring parts.",
    "Never met a yak I didn't shave.",
    "Fluent in stack traces.",
    "Everything is a side project.",
    "Born to wander, forced to deploy.",
    "The field is further than it looks.",
    "Have you tried turning it off and on again?",
    "Now in glorious 16:9.",
    "Mostly harmless.",
    "Keeping the clouds moving since this morning.",
    "Hello, world. Again.",
    "Patch notes available upon request.",
    "Made with questionable decisions.",
    "Scroll down. Or don't. The clouds move anyway.",
    "Somewhere between a hobby and a habit.",
];
