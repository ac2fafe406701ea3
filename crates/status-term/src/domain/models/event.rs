use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum Event {
    CheckStatus(u16),
    CheckError(anyhow::Error),
    KeyboardCTRLC,
    KeyboardInput(KeyEvent),
    UIResize,
    UITick,
}
