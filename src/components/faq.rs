use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Which question is open; at most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Opens `index`, closing any other; toggles it shut if it was open.
    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: (self.open != Some(index)).then_some(index),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Enter and Space work like a click on a question.
pub fn activates(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state_eq(Accordion::default);

    let items = props.entries.iter().enumerate().map(|(index, entry)| {
        let is_open = accordion.is_open(index);

        let onclick = {
            let accordion = accordion.clone();
            Callback::from(move |_: MouseEvent| accordion.set(accordion.toggle(index)))
        };
        let onkeydown = {
            let accordion = accordion.clone();
            Callback::from(move |e: KeyboardEvent| {
                if activates(&e.key()) {
                    e.prevent_default();
                    accordion.set(accordion.toggle(index));
                }
            })
        };

        html! {
            <div class={classes!("faq-item", is_open.then(|| "active"))}>
                <div
                    class="faq-question"
                    role="button"
                    tabindex="0"
                    aria-expanded={is_open.to_string()}
                    {onclick}
                    {onkeydown}
                >
                    <span class="question-text">{entry.question}</span>
                    <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                </div>
                <div class="faq-answer">
                    <p>{entry.answer}</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="faq-list">
            { for items }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let accordion = Accordion::default().toggle(0);
        assert!(accordion.is_open(0));

        let accordion = accordion.toggle(2);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn toggling_the_open_question_closes_it() {
        let accordion = Accordion::default().toggle(1).toggle(1);
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(activates("Enter"));
        assert!(activates(" "));
        assert!(!activates("Tab"));
        assert!(!activates("Escape"));
    }
}
