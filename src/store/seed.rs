//! Built-in question deck
//!
//! Served when no questions file is configured. Ids run 0..=10 in order.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::question::Question;

/// (question, [A, B, C, D], correct answer, hint)
type SeedEntry = (&'static str, [&'static str; 4], &'static str, &'static str);

const DECK: [SeedEntry; 11] = [
    (
        "How many feet are in a mile?",
        ["5260", "5270", "5280", "5290"],
        "C",
        "The altitude of Denver, Colorado",
    ),
    (
        "What was the first toy advertised on television?",
        ["The Rubix Cube", "Mr. Potato Head", "Barbie", "A hula hoop"],
        "B",
        "Use your head on this one",
    ),
    (
        "The martial art of kung fu originated in which country?",
        ["Viet Nam", "United States", "Japan", "China"],
        "D",
        "Name most likely derives from the name of the Qin dynasty",
    ),
    (
        "Which 1979 film included a spaceship called Nostromo?",
        ["The Emperor Strikes Back", "Alien", "The Black Hole", "Star Trek: The Motion Picture"],
        "B",
        "Not from this world",
    ),
    (
        "Which country lies on the border between Spain and France?",
        ["Andorra", "Luxemborg", "England", "Portugal"],
        "A",
        "Go with your first guess",
    ),
    (
        "CERN launched the very first website in what year?",
        ["1985", "1960", "1990", "1995"],
        "C",
        "Not before Star Wars",
    ),
    (
        "What is the largest animal currently on Earth?",
        ["Elephant", "Polar Bear", "Blue Whale", "Box Jellifish"],
        "C",
        "Stick to the seas",
    ),
    (
        "What was first feature length animated film?",
        ["Akira", "Snow White and the Seven Dwarfs", "Cinderella", "Bambi"],
        "B",
        "Bad apples",
    ),
    (
        "The assasination that is said to have lead to World War I, occured in what city?",
        ["Paris", "Sarajevo", "Belgrade", "Rome"],
        "B",
        "Go east",
    ),
    (
        "World War I flying ace Manfred von Richthofen is known by what nickname?",
        ["Snoopy", "Bob", "The Manchurian Candidate", "The Red Baron"],
        "D",
        "Royalty",
    ),
    (
        "The Lone Star State is the nickname for which U.S. State?",
        ["California", "Colorado", "Texas", "Alaska"],
        "C",
        "Don't 'mess' this one up",
    ),
];

/// Build the built-in deck, stamping every question with `now`
pub fn seed_questions(now: DateTime<Utc>) -> Result<Vec<Question>> {
    DECK.iter()
        .zip(0i64..)
        .map(|((question, [a, b, c, d], correct, hint), id)| {
            Question::builder()
                .id(id)
                .question(*question)
                .answer_a(*a)
                .answer_b(*b)
                .answer_c(*c)
                .answer_d(*d)
                .correct_answer(*correct)
                .hint(*hint)
                .last_updated(now)
                .build()
        })
        .collect()
}
