
use super::geometry::Rect;

pub const FIELD_WIDTH   : f32 = 640.0;
pub const FIELD_HEIGHT  : f32 = 480.0;
pub const PADDLE_SPEED  : f32 = 6.0;
pub const PADDLE_WIDTH  : f32 = 20.0;
pub const PADDLE_HEIGHT : f32 = 100.0;
pub const BALL_SPEED    : f32 = 4.0;
pub const BALL_SIZE     : f32 = 20.0;

const BALL_START : (f32, f32) = (310.0, 230.0);

///
/// The direction a paddle is being driven this tick.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Drive 
{
    Up,
    Down,
    #[default]
    Still
}

///
/// The drive applied to each paddle for one tick.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Controls 
{
    pub left: Drive,
    pub right: Drive
}

///
/// A game of single-screen Pong: two paddles, one ball, a rally score and the best 
/// score seen.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Pong 
{
    left: Rect,
    right: Rect,
    ball: Rect,
    velocity: (f32, f32),
    score: u32,
    high_score: u32
}

impl Pong 
{
    ///
    /// Returns the ball.
    ///
    pub fn ball (& self) -> & Rect 
    {
        & self.ball
    }

    ///
    /// Returns the best score seen.
    ///
    pub fn high_score (& self) -> u32 
    {
        self.high_score
    }

    ///
    /// Returns the left paddle.
    ///
    pub fn left (& self) -> & Rect 
    {
        & self.left
    }

    ///
    /// Returns a new game with both paddles centred and the ball moving down-right.
    ///
    pub fn new () -> Pong 
    {
        let paddle_y = (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0;

        Pong 
        {
            left: Rect::new(20.0, paddle_y, PADDLE_WIDTH, PADDLE_HEIGHT),
            right: Rect::new(FIELD_WIDTH - 20.0 - PADDLE_WIDTH, paddle_y, PADDLE_WIDTH, PADDLE_HEIGHT),
            ball: Rect::new(BALL_START.0, BALL_START.1, BALL_SIZE, BALL_SIZE),
            velocity: (BALL_SPEED, BALL_SPEED),
            score: 0,
            high_score: 0
        }
    }

    ///
    /// Returns the right paddle.
    ///
    pub fn right (& self) -> & Rect 
    {
        & self.right
    }

    ///
    /// Returns the current rally score.
    ///
    pub fn score (& self) -> u32 
    {
        self.score
    }

    ///
    /// Places the ball, keeping its velocity; used to set up positions.
    ///
    pub fn set_ball (& mut self, x: f32, y: f32, velocity: (f32, f32))
    {
        self.ball.set_origin(x, y);
        self.velocity = velocity;
    }

    ///
    /// Advances the game by one tick: paddles, then the ball, then walls, then paddle hits.
    ///
    pub fn step (& mut self, controls: Controls)
    {
        Pong::drive(& mut self.left, controls.left);
        Pong::drive(& mut self.right, controls.right);

        let (vx, vy) = self.velocity;
        self.ball.set_origin(self.ball.x() + vx, self.ball.y() + vy);

        self.bounce_off_walls();
        self.bounce_off_paddles();

        self.high_score = self.high_score.max(self.score);
    }

    ///
    /// Returns the ball velocity in pixels per tick.
    ///
    pub fn velocity (& self) -> (f32, f32)
    {
        self.velocity
    }

    fn bounce_off_paddles (& mut self)
    {
        if self.ball.intersects(& self.left)
        {
            self.ball.set_origin(self.left.right() + 1.0, self.ball.y());
            self.velocity.0 = - self.velocity.0;
            self.score += 1;
        }

        if self.ball.intersects(& self.right)
        {
            self.ball.set_origin(self.right.x() - self.ball.width() - 1.0, self.ball.y());
            self.velocity.0 = - self.velocity.0;
            self.score += 1;
        }
    }

    fn bounce_off_walls (& mut self)
    {
        // Missing the ball past either side wall ends the rally.

        if self.ball.x() <= BALL_SPEED || self.ball.x() >= FIELD_WIDTH - self.ball.width() - BALL_SPEED 
        {
            self.ball.set_origin(BALL_START.0, BALL_START.1);
            self.score = 0;
        }

        if self.ball.y() <= BALL_SPEED 
        {
            self.velocity.1 = self.velocity.1.abs();
        }
        else if self.ball.y() >= FIELD_HEIGHT - self.ball.height() - BALL_SPEED 
        {
            self.velocity.1 = - self.velocity.1.abs();
        }
    }

    fn drive (paddle: & mut Rect, drive: Drive)
    {
        let dy = match drive 
        {
            Drive::Up    => - PADDLE_SPEED,
            Drive::Down  => PADDLE_SPEED,
            Drive::Still => 0.0
        };
        let y = (paddle.y() + dy).clamp(0.0, FIELD_HEIGHT - paddle.height());
        paddle.set_origin(paddle.x(), y);
    }
}

impl Default for Pong 
{
    fn default () -> Pong 
    {
        Pong::new()
    }
}
