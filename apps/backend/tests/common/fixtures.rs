//! Test fixtures: quiz documents in the authoring format.

/// The canonical small document: one bonus multiple-choice question.
pub fn sample_quiz() -> &'static str {
    "\
# Sample Quiz

### What color is the sky? Bonus
**Type:** Multiple Choice
- [ ] Green
- [x] Blue
"
}

/// A free-text question with a media reference.
pub fn media_quiz() -> &'static str {
    "\
# Media Quiz

### Name this landmark
![landmark photo](landmark.png)
**Type:** Free Text
**Answer:** The Eiffel Tower
"
}

/// Generate a document with `count` multiple-choice questions.
pub fn quiz_with_questions(count: usize) -> String {
    let mut doc = String::from("# Generated Quiz\n");
    for i in 1..=count {
        doc.push_str(&format!(
            "\n### Question {i}\n**Type:** Multiple Choice\n- [x] Right {i}\n- [ ] Wrong {i}\n"
        ));
    }
    doc
}
