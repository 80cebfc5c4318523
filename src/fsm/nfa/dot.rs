use super::{
    super::{state_label, StateId},
    model::Nfa,
};

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot())
    }
}

impl Nfa {
    /// Converts the NFA to dot language using the [grahviz](https://graphviz.org/docs/layouts/dot/)
    /// dot language format.
    pub fn to_dot(&self) -> String {
        let final_dot = format!(
            "node [shape = doublecircle]; {};",
            self.final_states()
                .iter()
                .map(|id| state_label(*id))
                .collect::<Vec<String>>()
                .join(" ")
        );

        format!(
            "digraph nfa {{\n\
                \trankdir = LR;\n\
            \n\
                \t// final states\n\
                \t{}\n\
                \tnode [shape = circle]; {};\n\
            \n\
                {}\n\
            }}",
            final_dot,
            state_label(self.start_state()),
            self.transition_dot()
                .map(|l| format!("\t{}", l))
                .collect::<Vec<String>>()
                .join("\n")
        )
    }

    /// Converts the transitions to the dot format and returns an iterator over it.
    fn transition_dot(&self) -> impl Iterator<Item = String> + '_ {
        self.transition_tuples().map(|(start, dest, label)| {
            format!(
                "{} -> {} [label = \"{}\"];",
                state_label(start),
                state_label(dest),
                label
            )
        })
    }

    /// Creates an flattened iterator over the transitions of the NFA.
    fn transition_tuples(&self) -> impl Iterator<Item = (StateId, StateId, String)> + '_ {
        self.transitions().iter().flat_map(|(start, row)| {
            row.iter().flat_map(move |(input, dest_states)| {
                dest_states
                    .iter()
                    .map(move |dest| (*start, *dest, input.to_string()))
            })
        })
    }
}
