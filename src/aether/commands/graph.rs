use crate::commands::{CmdMessage, CmdResult};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> CmdResult {
    let graph = store.list_for_graph();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} notes, {} links",
        graph.nodes.len(),
        graph.edges.len()
    )));
    result.with_graph(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn projects_links_between_notes() {
        let fixture = StoreFixture::new()
            .with_text_note("Foo", "")
            .with_text_note("Bar", "see [[Foo]] and [[Baz]]");
        let foo = fixture.id_of("Foo");
        let bar = fixture.id_of("Bar");

        let result = run(&fixture.store);
        let graph = result.graph.unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].from, bar);
        assert_eq!(graph.edges[0].to, foo);
        assert_eq!(result.messages[0].content, "2 notes, 1 links");
    }
}
