use crate::app::App;
use crate::mpris::MprisHandle;

pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    mpris.set_status(app.status);
    let length = app.now_playing.map(|_| app.progress.total);
    mpris.set_track(app.now_playing, app.title.as_deref(), length);
    mpris.set_volume(app.volume);
}
