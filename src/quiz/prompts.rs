pub struct Prompt {
    pub sentence: &'static str,
    pub hints: &'static [&'static str],
}

pub const BASIC_TRANSLATION: &[Prompt] = &[
    Prompt {
        sentence: "All dogs are mammals.",
        hints: &[
            "Think about universal quantification (for all).",
            "You'll need an implication (if-then).",
            "The general form is: ∀x(P(x) → Q(x))",
        ],
    },
    Prompt {
        sentence: "Some cats are friendly.",
        hints: &[
            "Think about existential quantification (there exists).",
            "You'll need a conjunction (and).",
            "The general form is: ∃x(P(x) ∧ Q(x))",
        ],
    },
    Prompt {
        sentence: "No birds can fly.",
        hints: &[
            "Consider negation (not).",
            "This can be expressed using existential quantification or universal quantification.",
            "Think: 'There does not exist a bird that can fly.'",
        ],
    },
    Prompt {
        sentence: "If something is a square, then it is a rectangle.",
        hints: &[
            "This is a conditional statement.",
            "Use universal quantification for 'something'.",
            "The implication (→) represents the 'if-then'.",
        ],
    },
    Prompt {
        sentence: "There is a student who likes logic.",
        hints: &[
            "This requires existential quantification.",
            "You'll need a conjunction to connect the properties.",
            "The general form is 'There exists an x such that...'.",
        ],
    },
];

/// Cursor over a fixed prompt list with progressive hint reveal.
pub struct PromptDeck {
    prompts: &'static [Prompt],
    current: usize,
    hints_shown: usize,
}

impl Default for PromptDeck {
    fn default() -> Self {
        Self::new(BASIC_TRANSLATION)
    }
}

impl PromptDeck {
    pub fn new(prompts: &'static [Prompt]) -> Self {
        Self {
            prompts,
            current: 0,
            hints_shown: 0,
        }
    }

    pub fn current(&self) -> Option<&'static Prompt> {
        self.prompts.get(self.current)
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn visible_hints(&self) -> &'static [&'static str] {
        match self.current() {
            Some(prompt) => &prompt.hints[..self.hints_shown.min(prompt.hints.len())],
            None => &[],
        }
    }

    /// Returns false once every hint for the current prompt is visible.
    pub fn reveal_hint(&mut self) -> bool {
        let total = self.current().map_or(0, |p| p.hints.len());
        if self.hints_shown < total {
            self.hints_shown += 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        if self.prompts.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.prompts.len();
        self.hints_shown = 0;
    }

    pub fn prev(&mut self) {
        if self.prompts.is_empty() {
            return;
        }
        self.current = if self.current == 0 {
            self.prompts.len() - 1
        } else {
            self.current - 1
        };
        self.hints_shown = 0;
    }
}
