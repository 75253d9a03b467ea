/// The fixed pool of excuses boards are drawn from.
///
/// Order matters only for readability; sampling is uniform over the whole
/// array. Must stay at least [`PHRASES_PER_BOARD`](crate::domain::model::PHRASES_PER_BOARD)
/// entries long or board generation fails.
pub const EXCUSES: [&str; 28] = [
    "My hand was unplayable",
    "I drew my brick card(s)",
    "I only drew non-engine",
    "I only drew engine",
    "You had a custom hand",
    "I didn’t see any starters",
    "I didn’t see my Side Deck cards",
    "I sided wrong",
    "I always lose against you",
    "The judge call was wrong",
    "I misplayed",
    "I forgot to activate my effect",
    "Dice roll screwed me",
    "Your deck only wins when you go first",
    "You had the 1-of",
    "You drew the out",
    "My topdecks were bad",
    "Your topdecks were crazy",
    "My deck isn’t finished",
    "I’m still learning the deck",
    "I was testing tech cards",
    "I didn’t know what your cards did",
    "Bad matchup",
    "Time rules screwed me",
    "That’s not how it works on Master Duel",
    "I would’ve won next turn",
    "I don’t know the matchup",
    "You’re playing a higher tier deck",
];
