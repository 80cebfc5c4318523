use super::{super::state_label, model::Dfa};

impl std::fmt::Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot())
    }
}

impl Dfa {
    /// Converts the DFA to dot language using the [grahviz](https://graphviz.org/docs/layouts/dot/)
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

        let transition_dot = self
            .transitions()
            .iter()
            .flat_map(|(start, row)| {
                row.iter().map(move |(symbol, dest)| {
                    format!(
                        "\t{} -> {} [label = \"{}\"];",
                        state_label(*start),
                        state_label(*dest),
                        symbol
                    )
                })
            })
            .collect::<Vec<String>>()
            .join("\n");

        format!(
            "digraph dfa {{\n\
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
            transition_dot
        )
    }
}
