mod completion;
mod conversation_store;
mod embedding;
mod ticket_store;

pub use completion::ICompletionProvider;
pub use conversation_store::IConversationStore;
pub use embedding::IEmbeddingProvider;
pub use ticket_store::{ITicketStore, StoreCapability, TicketAttribute};
